use std::f64::consts::FRAC_PI_2;

use tracing::{debug, trace, warn};

use crate::core::{Dataset, Region, proportional_spans, resolve_colors, scalar_entries};
use crate::error::{ChartError, ChartResult};
use crate::render::{DegenerateInput, LabelAnchor, LayoutFrame, WedgePrimitive};

use super::bar_layout::push_no_data_label;
use super::legend_layout::{LegendAppearance, LegendEntry, LegendSide, stack_vertical};
use super::validation::{clamp_cosmetic, clamp_non_negative};
use super::PieChartStyle;

/// Share of the width given to the legend column when it is shown.
const LEGEND_COLUMN_FRACTION: f64 = 1.0 / 3.0;
/// Share of the hole diameter the center text may wrap within.
const CENTER_TEXT_WIDTH_FRACTION: f64 = 0.9;

/// Radius at which a percentage label sits.
///
/// `factor` is remapped from `[0, 1]` onto `[inner, outer]`, so donut labels
/// always stay inside the visible band. With `inner == 0` this is
/// `outer * factor`.
#[must_use]
pub fn slice_label_radius(inner: f64, outer: f64, factor: f64) -> f64 {
    inner + factor.clamp(0.0, 1.0) * (outer - inner)
}

/// Lays out a pie, or a donut when `style.donut` is set.
///
/// Wedges start at 12 o'clock and run clockwise. A donut adds a full-circle
/// hole wedge after every slice so it paints over their inner edges.
pub fn layout_slice_chart(
    data: &Dataset,
    region: Region,
    style: &PieChartStyle,
) -> ChartResult<LayoutFrame> {
    let region = region.validate()?;
    let entries = scalar_entries(data)?;
    if let Some(negative) = entries.iter().find(|entry| entry.value < 0.0) {
        return Err(ChartError::InvalidData(format!(
            "pie value for `{}` must be >= 0, got {}",
            negative.label, negative.value
        )));
    }
    debug!(
        slices = entries.len(),
        donut = style.donut.is_some(),
        width = region.width,
        height = region.height,
        "slice layout pass"
    );

    let mut frame = LayoutFrame::new(region);
    if entries.is_empty() {
        warn!("pie chart has no data");
        push_no_data_label(&mut frame, style.no_data_text.as_deref(), &style.no_data_label)?;
        return Ok(frame.with_degenerate(DegenerateInput::EmptyDataset));
    }

    let colors = resolve_colors(&style.palette, entries.len())?;
    let (legend_column, chart_area) = if style.legend.show {
        let legend_width = region.width * LEGEND_COLUMN_FRACTION;
        match style.legend.side {
            LegendSide::Left => region.split_left(legend_width),
            LegendSide::Right => region.split_right(legend_width),
        }
    } else {
        (Region::new(0.0, 0.0), region)
    };

    let center = chart_area.center();
    let margin = clamp_non_negative("chart_margin", style.chart_margin);
    let outer_radius = (chart_area.inradius() - margin).max(0.0);
    let inner_radius = match &style.donut {
        Some(donut) => outer_radius * clamp_cosmetic("donut_radius", donut.donut_radius, 0.2, 0.8),
        None => 0.0,
    };
    let label_factor = clamp_cosmetic(
        "percentage_distance_factor",
        style.percentage_distance_factor,
        0.0,
        1.0,
    );
    let label_radius = slice_label_radius(inner_radius, outer_radius, label_factor);

    let values: Vec<f64> = entries.iter().map(|entry| entry.value).collect();
    let spans = proportional_spans(&values, -FRAC_PI_2)?;
    if spans.is_degenerate() {
        warn!("pie values sum to zero; every wedge has zero sweep");
        frame.degenerate = Some(DegenerateInput::ZeroTotal);
    }

    let (label_font_size, label_color) = style.percentage_label.resolve()?;
    for (index, span) in spans.spans.iter().enumerate() {
        frame.wedges.push(WedgePrimitive {
            cx: center.x,
            cy: center.y,
            inner_radius,
            outer_radius,
            start_angle: span.start_angle,
            sweep_angle: span.sweep_angle,
            color: colors.get(index),
        });
        trace!(index, start = span.start_angle, sweep = span.sweep_angle, "wedge");

        // Zero slices get no label so nothing overlaps the next wedge's start.
        if span.sweep_angle > 0.0 {
            let anchor = center.polar_offset(label_radius, span.mid_angle());
            frame.labels.push(LabelAnchor::new(
                format!("{:.1}%", span.fraction * 100.0),
                anchor.x,
                anchor.y,
                label_font_size,
                label_color,
            ));
        }
    }

    if let Some(donut) = &style.donut {
        frame.wedges.push(WedgePrimitive::disc(
            center,
            inner_radius,
            donut.hole_color.resolve()?,
        ));
        if let Some(text) = donut.center_text.as_deref().filter(|text| !text.is_empty()) {
            let (font_size, color) = donut.center_label.resolve()?;
            frame.labels.push(
                LabelAnchor::new(text, center.x, center.y, font_size, color).wrapped(
                    2.0 * inner_radius * CENTER_TEXT_WIDTH_FRACTION,
                    donut.center_text_lines.max(1),
                ),
            );
        }
    }

    if style.legend.show {
        let (font_size, label_color) = style.legend.label.resolve()?;
        let legend_entries: Vec<LegendEntry> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| LegendEntry::new(entry.label, colors.get(index)))
            .collect();
        let legend = stack_vertical(
            &legend_entries,
            legend_column,
            style.legend.align,
            style.legend.metrics,
            LegendAppearance {
                shape: style.legend.key_shape,
                key_style: style.legend.key_style,
                font_size,
                label_color,
            },
        );
        frame.legend_keys.extend(legend.keys);
        frame.labels.extend(legend.labels);
    }

    Ok(frame)
}
