use std::f64::consts::FRAC_PI_4;

use tracing::{debug, trace, warn};

use crate::core::{
    Color, Dataset, LinearScale, Point, Region, format_tick, format_value, resolve_colors,
    scalar_entries, value_extremes,
};
use crate::error::ChartResult;
use crate::render::{
    BarMeta, DegenerateInput, GridLinePrimitive, LabelAnchor, LayoutFrame, RectPrimitive,
    TextHAlign, TextVAlign,
};

use super::validation::{clamp_cosmetic, clamp_non_negative, clamp_stroke_width};
use super::{BarChartStyle, ChartMode, TextStyle, XLabelRotation};

/// Lays out one bar per entry in equal-width slots across `region`.
///
/// Bars grow from a zero baseline: up for positive values, down for negative
/// ones. The baseline sits on the region bottom for non-negative data and
/// proportionally inside the region when signs are mixed.
pub fn layout_bar_chart(
    data: &Dataset,
    region: Region,
    style: &BarChartStyle,
) -> ChartResult<LayoutFrame> {
    let region = region.validate()?;
    let entries = scalar_entries(data)?;
    debug!(
        bars = entries.len(),
        width = region.width,
        height = region.height,
        "bar layout pass"
    );

    let mut frame = LayoutFrame::new(region);
    if let Some(title) = style.title.as_deref().filter(|title| !title.is_empty()) {
        let (font_size, color) = style.title_label.resolve()?;
        frame.labels.push(
            LabelAnchor::new(
                title,
                region.center().x,
                region.y - style.title_offset,
                font_size,
                color,
            )
            .aligned(TextHAlign::Center, TextVAlign::Bottom),
        );
    }

    if entries.is_empty() {
        warn!("bar chart has no data");
        push_no_data_label(&mut frame, style.no_data_text.as_deref(), &style.no_data_label)?;
        return Ok(frame.with_degenerate(DegenerateInput::EmptyDataset));
    }

    let values: Vec<f64> = entries.iter().map(|entry| entry.value).collect();
    let colors = resolve_colors(&style.palette, entries.len())?;
    let headroom = clamp_cosmetic("headroom", style.headroom, 0.0, 1.0);
    let scale = LinearScale::auto_from_values(&values, headroom)?;
    let baseline_y = match scale {
        Some(scale) => region.bottom() - scale.normalize(0.0) * region.height,
        None => {
            warn!("every bar value is zero; bars collapse onto the baseline");
            frame.degenerate = Some(DegenerateInput::ZeroRange);
            region.bottom()
        }
    };

    let slot = region.width / entries.len() as f64;
    let gap = clamp_cosmetic("bar_gap", style.bar_gap, 0.0, slot);
    let bar_width = slot - gap;
    let corner_radius = clamp_non_negative("bar_radius", style.bar_radius);
    let (value_font_size, value_color) = style.value_label.resolve()?;
    let (axis_font_size, axis_color) = style.axis_label.resolve()?;

    for (index, entry) in entries.iter().enumerate() {
        let length = scale.map_or(0.0, |scale| {
            scale.to_length(entry.value.abs(), region.height)
        });
        let left = region.x + index as f64 * slot + gap * 0.5;
        let top = if entry.value >= 0.0 {
            baseline_y - length
        } else {
            baseline_y
        };
        let radius = corner_radius.min(bar_width.min(length) * 0.5);
        trace!(index, left, top, length, "bar geometry");

        frame.bars.push(
            RectPrimitive::new(left, top, bar_width, length, colors.get(index))
                .with_corner_radius(radius)
                .with_meta(BarMeta {
                    index,
                    label: entry.label.to_owned(),
                    value: entry.value,
                }),
        );

        let center_x = left + bar_width * 0.5;
        if style.chart_mode == ChartMode::Standard {
            let (anchor_y, v_align) = if entry.value >= 0.0 {
                (top - style.value_label_offset, TextVAlign::Bottom)
            } else {
                (top + length + style.value_label_offset, TextVAlign::Top)
            };
            frame.labels.push(
                LabelAnchor::new(
                    format_value(entry.value),
                    center_x,
                    anchor_y,
                    value_font_size,
                    value_color,
                )
                .aligned(TextHAlign::Center, v_align),
            );
        }

        if !entry.label.is_empty() {
            frame.labels.push(x_axis_label(
                entry.label,
                center_x,
                region.bottom() + style.x_axis_label_offset,
                style.x_axis_label_rotation,
                axis_font_size,
                axis_color,
            ));
        }
    }

    if let Some(scale) = scale.filter(|_| style.grid || style.y_axis_labels) {
        let (low, high) = nominal_extremes(&values)?;
        append_grid(
            &mut frame,
            style,
            scale,
            baseline_y,
            (low, high),
            (axis_font_size, axis_color),
        )?;
    }

    Ok(frame)
}

/// Values covered by the grid: the data extremes widened to include zero,
/// without headroom.
fn nominal_extremes(values: &[f64]) -> ChartResult<(f64, f64)> {
    Ok(value_extremes(values)?
        .map(|(min, max)| (min.min(0.0), max.max(0.0)))
        .unwrap_or((0.0, 0.0)))
}

fn append_grid(
    frame: &mut LayoutFrame,
    style: &BarChartStyle,
    scale: LinearScale,
    baseline_y: f64,
    (low, high): (f64, f64),
    (font_size, label_color): (f64, Color),
) -> ChartResult<()> {
    let region = frame.region;
    let divisions = style.grid_divisions.max(1);
    let grid_color = style.grid_color.resolve()?;
    let grid_width = clamp_stroke_width("grid_line_width", style.grid_line_width);

    for step in 0..=divisions {
        let value = low + (high - low) * step as f64 / divisions as f64;
        let y = baseline_y - scale.to_length(value, region.height);
        if style.grid {
            frame.grid_lines.push(
                GridLinePrimitive::segment(
                    Point::new(region.x, y),
                    Point::new(region.right(), y),
                    grid_color,
                    grid_width,
                )
                .with_style(style.grid_style),
            );
        }
        if style.y_axis_labels {
            frame.labels.push(
                LabelAnchor::new(
                    format_tick(value),
                    region.x - style.y_axis_label_offset,
                    y,
                    font_size,
                    label_color,
                )
                .aligned(TextHAlign::Right, TextVAlign::Middle),
            );
        }
    }
    trace!(divisions, low, high, "bar grid");
    Ok(())
}

fn x_axis_label(
    text: &str,
    x: f64,
    y: f64,
    rotation: XLabelRotation,
    font_size: f64,
    color: Color,
) -> LabelAnchor {
    // Rotated text needs extra room below the region so its top corner clears it.
    let drop = font_size * FRAC_PI_4.sin() * 0.5;
    let label = LabelAnchor::new(text, x, y, font_size, color);
    match rotation {
        XLabelRotation::None => label.aligned(TextHAlign::Center, TextVAlign::Top),
        XLabelRotation::LeftUp => LabelAnchor { y: y + drop, ..label }
            .aligned(TextHAlign::Right, TextVAlign::Top)
            .rotated(-FRAC_PI_4),
        XLabelRotation::LeftDown => LabelAnchor { y: y + drop, ..label }
            .aligned(TextHAlign::Left, TextVAlign::Top)
            .rotated(FRAC_PI_4),
    }
}

pub(super) fn push_no_data_label(
    frame: &mut LayoutFrame,
    text: Option<&str>,
    label_style: &TextStyle,
) -> ChartResult<()> {
    if let Some(text) = text.filter(|text| !text.is_empty()) {
        let (font_size, color) = label_style.resolve()?;
        let center = frame.region.center();
        frame
            .labels
            .push(LabelAnchor::new(text, center.x, center.y, font_size, color));
    }
    Ok(())
}
