pub mod color;
pub mod dataset;
pub mod palette;
pub mod scale;
pub mod shapes;
pub mod text_metrics;
pub mod types;

pub use color::{Color, ColorToken};
pub use dataset::{
    AdjustPolicy, Dataset, LabeledValue, RadarSeries, SeriesValues, dataset_from,
    normalize_categories, reconcile_series, scalar_entries,
};
pub use palette::{
    BAR_DEFAULT_COLOR, BAR_GRADIENT_COLORS, ColorStyle, PIE_PALETTE, PaletteConfig, RADAR_PALETTE,
    ResolvedColorSet, resolve_colors, sample_gradient,
};
pub use scale::{AngularSpan, LinearScale, ProportionalSpans, proportional_spans, value_extremes};
pub use shapes::{KeyShape, KeyStyle, ShapeVertices, regular_polygon, star};
pub use text_metrics::{HeuristicTextMeasurer, TextMeasurer, format_tick, format_value};
pub use types::{Point, Region};
