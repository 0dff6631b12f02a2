mod frame;
mod null_renderer;
mod primitives;

pub use crate::core::Color;
pub use frame::{DegenerateInput, LayoutFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    BarMeta, GeometryPrimitive, GridLinePrimitive, GridPath, LabelAnchor, LegendKeyPrimitive,
    LineStrokeStyle, PolygonPrimitive, RectPrimitive, TextHAlign, TextVAlign, WedgePrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `LayoutFrame` so
/// drawing code stays isolated from layout decisions.
pub trait Renderer {
    fn render(&mut self, frame: &LayoutFrame) -> ChartResult<()>;
}
