use std::f64::consts::{FRAC_PI_2, TAU};

use tracing::{debug, trace, warn};

use crate::core::{
    AdjustPolicy, Dataset, HeuristicTextMeasurer, LinearScale, Point, Region, TextMeasurer,
    format_tick, normalize_categories, reconcile_series, resolve_colors,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    DegenerateInput, GridLinePrimitive, GridPath, LabelAnchor, LayoutFrame, LineStrokeStyle,
    PolygonPrimitive, TextHAlign, TextVAlign, WedgePrimitive,
};

use super::legend_layout::{LegendAlign, LegendAppearance, LegendEntry, flow_rows};
use super::validation::{clamp_cosmetic, clamp_non_negative, clamp_stroke_width};
use super::{PlotStyle, RadarChartStyle, RadarGridShape};

/// Share of the height reserved for the legend band when it is shown.
const LEGEND_BAND_FRACTION: f64 = 0.2;
/// Horizontal nudge that keeps side category labels clear of the outer ring.
const CATEGORY_LABEL_NUDGE: f64 = 10.0;

/// Angle of axis `index` out of `count`, first axis pointing up and the rest
/// following clockwise.
#[must_use]
pub fn radar_axis_angle(index: usize, count: usize) -> f64 {
    TAU * index as f64 / count as f64 - FRAC_PI_2
}

/// Lays out a radar chart, measuring legend labels with the heuristic measurer.
pub fn layout_radar_chart(
    data: &Dataset,
    categories: &[String],
    region: Region,
    style: &RadarChartStyle,
) -> ChartResult<LayoutFrame> {
    layout_radar_chart_with_measurer(data, categories, region, style, &HeuristicTextMeasurer)
}

/// Lays out a radar chart: rings, axis lines, one polygon per dataset and
/// the optional markers, scale values, category labels and legend.
///
/// Every dataset is reconciled against the categories before any geometry is
/// produced; a mismatch with `adjust_data` off fails the whole pass.
pub fn layout_radar_chart_with_measurer(
    data: &Dataset,
    categories: &[String],
    region: Region,
    style: &RadarChartStyle,
    measurer: &dyn TextMeasurer,
) -> ChartResult<LayoutFrame> {
    let region = region.validate()?;
    let scale = LinearScale::radar(style.max_value)?;
    let categories = normalize_categories(categories);
    let policy = if style.adjust_data {
        if !style.missing_value_fill.is_finite() {
            return Err(ChartError::InvalidData(
                "missing_value_fill must be finite".to_owned(),
            ));
        }
        AdjustPolicy::PadOrTruncate {
            fill: style.missing_value_fill,
        }
    } else {
        AdjustPolicy::Strict
    };
    let series = reconcile_series(data, categories.len(), policy)?;
    debug!(
        datasets = series.len(),
        categories = categories.len(),
        width = region.width,
        height = region.height,
        "radar layout pass"
    );

    let mut frame = LayoutFrame::new(region);
    if categories.is_empty() {
        warn!("radar chart has no categories");
        return Ok(frame.with_degenerate(DegenerateInput::NoCategories));
    }
    if series.is_empty() {
        warn!("radar chart has no datasets");
        return Ok(frame.with_degenerate(DegenerateInput::EmptyDataset));
    }

    let colors = resolve_colors(&style.palette, series.len())?;
    let (legend_band, chart_area) = if style.legend.show {
        let band_height = region.height * LEGEND_BAND_FRACTION;
        match style.legend.align {
            LegendAlign::Top => region.split_top(band_height),
            LegendAlign::Center | LegendAlign::Bottom => region.split_bottom(band_height),
        }
    } else {
        (Region::new(0.0, 0.0), region)
    };

    let geometry = RadarGeometry {
        center: chart_area.center(),
        radius: (chart_area.inradius() - clamp_non_negative("label_margin", style.label_margin))
            .max(0.0),
        axis_count: categories.len(),
    };
    append_grid(&mut frame, &geometry, style)?;

    let transparency = clamp_cosmetic("dataset_transparency", style.dataset_transparency, 0.0, 1.0);
    let line_width = clamp_stroke_width("dataset_line_width", style.dataset_line_width);
    let marker_radius = clamp_non_negative("marker_size", style.marker_size) * 0.5;
    for (index, dataset) in series.iter().enumerate() {
        let color = colors.get(index);
        let vertices: Vec<Point> = dataset
            .values
            .iter()
            .enumerate()
            .map(|(axis, value)| {
                geometry.axis_point(axis, scale.to_length_clamped(*value, geometry.radius))
            })
            .collect();

        let fills = style.plot_style.fills_dataset(index);
        if style.show_markers && marker_radius > 0.0 {
            frame.markers.extend(
                vertices
                    .iter()
                    .map(|vertex| WedgePrimitive::disc(*vertex, marker_radius, color)),
            );
        }
        trace!(dataset = dataset.name.as_str(), fills, "radar polygon");
        frame.polygons.push(PolygonPrimitive {
            vertices,
            stroke_color: Some(color),
            stroke_width: line_width,
            fill_color: fills.then(|| color.with_alpha(transparency)),
            fill_alpha: if fills { transparency } else { 0.0 },
        });
    }

    if style.show_scale_values {
        append_scale_values(&mut frame, &geometry, style)?;
    }
    append_category_labels(&mut frame, &geometry, &categories, style)?;

    if style.legend.show {
        let (font_size, label_color) = style.legend.label.resolve()?;
        let entries: Vec<LegendEntry> = series
            .iter()
            .enumerate()
            .map(|(index, dataset)| {
                let color = colors.get(index);
                let color = if style.plot_style == PlotStyle::Filled {
                    color.with_alpha(transparency)
                } else {
                    color
                };
                LegendEntry::new(dataset.name.clone(), color)
            })
            .collect();
        let legend = flow_rows(
            &entries,
            legend_band,
            style.legend.align,
            style.legend.metrics,
            LegendAppearance {
                shape: style.legend.key_shape,
                key_style: style.legend.key_style(),
                font_size,
                label_color,
            },
            measurer,
        );
        frame.legend_keys.extend(legend.keys);
        frame.labels.extend(legend.labels);
    }

    Ok(frame)
}

struct RadarGeometry {
    center: Point,
    radius: f64,
    axis_count: usize,
}

impl RadarGeometry {
    fn axis_point(&self, axis: usize, distance: f64) -> Point {
        self.center
            .polar_offset(distance, radar_axis_angle(axis, self.axis_count))
    }
}

fn append_grid(
    frame: &mut LayoutFrame,
    geometry: &RadarGeometry,
    style: &RadarChartStyle,
) -> ChartResult<()> {
    let rings = style.num_grid_lines.max(1);
    let grid_color = style.grid_color.resolve()?;
    let grid_width = clamp_stroke_width("grid_line_width", style.grid_line_width);
    // A polygonal ring through a single axis is a point, not a line.
    let ring_count = if style.grid_shape == RadarGridShape::Polygonal && geometry.axis_count < 2 {
        0
    } else {
        rings
    };
    for ring in 1..=ring_count {
        let ring_radius = geometry.radius * ring as f64 / rings as f64;
        let path = match style.grid_shape {
            RadarGridShape::Polygonal => GridPath::Polyline {
                points: (0..geometry.axis_count)
                    .map(|axis| geometry.axis_point(axis, ring_radius))
                    .collect(),
                closed: true,
            },
            RadarGridShape::Circular => GridPath::Circle {
                center: geometry.center,
                radius: ring_radius,
            },
        };
        frame.grid_lines.push(GridLinePrimitive {
            path,
            style: LineStrokeStyle::Solid,
            color: grid_color,
            width: grid_width,
        });
    }

    let axis_color = style.axis_line_color.resolve()?;
    let axis_width = clamp_stroke_width("axis_line_width", style.axis_line_width);
    for axis in 0..geometry.axis_count {
        frame.grid_lines.push(GridLinePrimitive::segment(
            geometry.center,
            geometry.axis_point(axis, geometry.radius),
            axis_color,
            axis_width,
        ));
    }
    trace!(rings, axes = geometry.axis_count, "radar grid");
    Ok(())
}

fn append_scale_values(
    frame: &mut LayoutFrame,
    geometry: &RadarGeometry,
    style: &RadarChartStyle,
) -> ChartResult<()> {
    let rings = style.num_grid_lines.max(1);
    let (font_size, color) = style.scale_value_label.resolve()?;
    for ring in 1..=rings {
        let ratio = ring as f64 / rings as f64;
        let anchor = geometry.axis_point(0, geometry.radius * ratio);
        frame.labels.push(LabelAnchor::new(
            format_tick(style.max_value * ratio),
            anchor.x + style.scale_value_offset,
            anchor.y,
            font_size,
            color,
        ));
    }
    Ok(())
}

fn append_category_labels(
    frame: &mut LayoutFrame,
    geometry: &RadarGeometry,
    categories: &[String],
    style: &RadarChartStyle,
) -> ChartResult<()> {
    let (font_size, color) = style.category_label.resolve()?;
    let count = geometry.axis_count;
    for (axis, category) in categories.iter().enumerate() {
        if category.is_empty() {
            continue;
        }
        let anchor = geometry.axis_point(axis, geometry.radius + style.category_label_offset);
        let label = LabelAnchor::new(category.clone(), anchor.x, anchor.y, font_size, color);
        // Axis 0 points up; an axis pointing straight down exists only for an even count.
        let label = if axis == 0 {
            label.aligned(TextHAlign::Center, TextVAlign::Bottom)
        } else if axis * 2 == count {
            label.aligned(TextHAlign::Center, TextVAlign::Top)
        } else if axis * 2 < count {
            LabelAnchor {
                x: anchor.x + CATEGORY_LABEL_NUDGE,
                ..label
            }
            .aligned(TextHAlign::Left, TextVAlign::Middle)
        } else {
            LabelAnchor {
                x: anchor.x - CATEGORY_LABEL_NUDGE,
                ..label
            }
            .aligned(TextHAlign::Right, TextVAlign::Middle)
        };
        frame.labels.push(label);
    }
    Ok(())
}
