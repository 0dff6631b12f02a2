#[cfg(feature = "parallel-layout")]
use rayon::prelude::*;

use crate::error::ChartResult;
use crate::render::LayoutFrame;

use super::{ChartStyle, LayoutInput, layout_bar_chart, layout_radar_chart, layout_slice_chart};

/// Runs one full layout pass over `input`.
///
/// The pass is pure: identical input always yields a bit-identical frame.
pub fn compute_layout(input: &LayoutInput) -> ChartResult<LayoutFrame> {
    match &input.style {
        ChartStyle::Bar(style) => layout_bar_chart(&input.data, input.region, style),
        ChartStyle::Pie(style) => layout_slice_chart(&input.data, input.region, style),
        ChartStyle::Radar(style) => {
            layout_radar_chart(&input.data, &input.categories, input.region, style)
        }
    }
}

/// Lays out independent charts, one result per input, in input order.
///
/// A failing chart does not affect the others.
#[must_use]
pub fn compute_layouts(inputs: &[LayoutInput]) -> Vec<ChartResult<LayoutFrame>> {
    // Inputs share nothing, so the parallel path returns exactly what the
    // sequential one does.
    #[cfg(feature = "parallel-layout")]
    {
        inputs.par_iter().map(compute_layout).collect()
    }

    #[cfg(not(feature = "parallel-layout"))]
    {
        inputs.iter().map(compute_layout).collect()
    }
}
