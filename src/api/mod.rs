mod bar_layout;
mod bar_style;
mod engine;
mod input;
mod json_contract;
mod layout;
mod legend_layout;
mod pie_style;
mod radar_layout;
mod radar_style;
mod slice_layout;
mod style;
mod validation;

pub use bar_layout::layout_bar_chart;
pub use bar_style::{BarChartStyle, ChartMode, XLabelRotation};
pub use engine::ChartEngine;
pub use input::LayoutInput;
pub use json_contract::{LAYOUT_FRAME_JSON_SCHEMA_V1, LayoutFrameJsonContractV1};
pub use layout::{compute_layout, compute_layouts};
pub use legend_layout::{
    FlowMetrics, LegendAlign, LegendAppearance, LegendEntry, LegendLayout, LegendSide,
    StackMetrics, flow_rows, stack_vertical,
};
pub use pie_style::{DonutStyle, PieChartStyle, PieLegendStyle};
pub use radar_layout::{layout_radar_chart, layout_radar_chart_with_measurer, radar_axis_angle};
pub use radar_style::{PlotStyle, RadarChartStyle, RadarGridShape, RadarLegendStyle};
pub use slice_layout::{layout_slice_chart, slice_label_radius};
pub use style::{ChartStyle, TextStyle};
