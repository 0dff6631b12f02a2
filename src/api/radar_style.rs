use serde::{Deserialize, Serialize};

use crate::core::{ColorToken, KeyShape, KeyStyle, PaletteConfig};

use super::{FlowMetrics, LegendAlign, TextStyle};

/// Shape of the concentric grid rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RadarGridShape {
    /// One closed polyline per ring through the axis points.
    #[default]
    Polygonal,
    Circular,
}

/// How dataset polygons are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlotStyle {
    #[default]
    Outlined,
    /// Outline plus a translucent fill.
    Filled,
    /// Even dataset indices filled, odd ones outlined.
    Mixed,
}

impl PlotStyle {
    /// Whether the dataset at `index` gets a translucent fill.
    #[must_use]
    pub fn fills_dataset(self, index: usize) -> bool {
        match self {
            Self::Outlined => false,
            Self::Filled => true,
            Self::Mixed => index % 2 == 0,
        }
    }
}

/// Legend band above or below a radar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarLegendStyle {
    #[serde(default)]
    pub show: bool,
    #[serde(default = "default_legend_align")]
    pub align: LegendAlign,
    #[serde(default = "default_legend_shape")]
    pub key_shape: KeyShape,
    #[serde(default = "default_legend_label")]
    pub label: TextStyle,
    #[serde(default)]
    pub metrics: FlowMetrics,
}

impl Default for RadarLegendStyle {
    fn default() -> Self {
        Self {
            show: false,
            align: default_legend_align(),
            key_shape: default_legend_shape(),
            label: default_legend_label(),
            metrics: FlowMetrics::default(),
        }
    }
}

impl RadarLegendStyle {
    #[must_use]
    pub fn shown(align: LegendAlign) -> Self {
        Self {
            show: true,
            align,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_key_shape(mut self, shape: KeyShape) -> Self {
        self.key_shape = shape;
        self
    }

    /// Radar legend keys are always drawn filled.
    #[must_use]
    pub fn key_style(&self) -> KeyStyle {
        KeyStyle::Filled
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChartStyle {
    #[serde(default = "PaletteConfig::radar_default")]
    pub palette: PaletteConfig,
    /// Value mapped to the outer ring; must be finite and > 0.
    #[serde(default = "default_max_value")]
    pub max_value: f64,
    /// Pad or truncate datasets whose length differs from the category count.
    #[serde(default)]
    pub adjust_data: bool,
    #[serde(default)]
    pub missing_value_fill: f64,
    /// Space between the outer ring and the chart area edge, kept for labels.
    #[serde(default = "default_label_margin")]
    pub label_margin: f64,
    #[serde(default = "default_category_label")]
    pub category_label: TextStyle,
    #[serde(default = "default_category_label_offset")]
    pub category_label_offset: f64,
    #[serde(default = "default_num_grid_lines")]
    pub num_grid_lines: usize,
    #[serde(default)]
    pub grid_shape: RadarGridShape,
    #[serde(default = "default_grid_color")]
    pub grid_color: ColorToken,
    #[serde(default = "default_grid_line_width")]
    pub grid_line_width: f64,
    #[serde(default = "default_grid_color")]
    pub axis_line_color: ColorToken,
    #[serde(default = "default_axis_line_width")]
    pub axis_line_width: f64,
    #[serde(default)]
    pub plot_style: PlotStyle,
    /// Fill alpha for filled datasets, clamped to `[0, 1]`.
    #[serde(default = "default_dataset_transparency")]
    pub dataset_transparency: f64,
    #[serde(default = "default_dataset_line_width")]
    pub dataset_line_width: f64,
    #[serde(default)]
    pub show_markers: bool,
    #[serde(default = "default_marker_size")]
    pub marker_size: f64,
    #[serde(default = "default_show_scale_values")]
    pub show_scale_values: bool,
    #[serde(default = "default_scale_value_label")]
    pub scale_value_label: TextStyle,
    /// Horizontal distance of scale values from the first axis.
    #[serde(default = "default_scale_value_offset")]
    pub scale_value_offset: f64,
    #[serde(default)]
    pub legend: RadarLegendStyle,
}

impl Default for RadarChartStyle {
    fn default() -> Self {
        Self {
            palette: PaletteConfig::radar_default(),
            max_value: default_max_value(),
            adjust_data: false,
            missing_value_fill: 0.0,
            label_margin: default_label_margin(),
            category_label: default_category_label(),
            category_label_offset: default_category_label_offset(),
            num_grid_lines: default_num_grid_lines(),
            grid_shape: RadarGridShape::Polygonal,
            grid_color: default_grid_color(),
            grid_line_width: default_grid_line_width(),
            axis_line_color: default_grid_color(),
            axis_line_width: default_axis_line_width(),
            plot_style: PlotStyle::Outlined,
            dataset_transparency: default_dataset_transparency(),
            dataset_line_width: default_dataset_line_width(),
            show_markers: false,
            marker_size: default_marker_size(),
            show_scale_values: default_show_scale_values(),
            scale_value_label: default_scale_value_label(),
            scale_value_offset: default_scale_value_offset(),
            legend: RadarLegendStyle::default(),
        }
    }
}

impl RadarChartStyle {
    #[must_use]
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = max_value;
        self
    }

    /// Enables length reconciliation, padding short datasets with `fill`.
    #[must_use]
    pub fn with_adjust_data(mut self, fill: f64) -> Self {
        self.adjust_data = true;
        self.missing_value_fill = fill;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, shape: RadarGridShape, num_grid_lines: usize) -> Self {
        self.grid_shape = shape;
        self.num_grid_lines = num_grid_lines;
        self
    }

    #[must_use]
    pub fn with_plot_style(mut self, plot_style: PlotStyle) -> Self {
        self.plot_style = plot_style;
        self
    }

    #[must_use]
    pub fn with_dataset_transparency(mut self, transparency: f64) -> Self {
        self.dataset_transparency = transparency;
        self
    }

    #[must_use]
    pub fn with_markers(mut self, marker_size: f64) -> Self {
        self.show_markers = true;
        self.marker_size = marker_size;
        self
    }

    #[must_use]
    pub fn with_scale_values(mut self, enabled: bool) -> Self {
        self.show_scale_values = enabled;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: RadarLegendStyle) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: PaletteConfig) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_label_margin(mut self, margin: f64) -> Self {
        self.label_margin = margin;
        self
    }
}

fn default_legend_align() -> LegendAlign {
    LegendAlign::Bottom
}

fn default_legend_shape() -> KeyShape {
    KeyShape::Square
}

fn default_legend_label() -> TextStyle {
    TextStyle::sized(14.0)
}

fn default_max_value() -> f64 {
    100.0
}

fn default_label_margin() -> f64 {
    40.0
}

fn default_category_label() -> TextStyle {
    TextStyle::sized(14.0)
}

fn default_category_label_offset() -> f64 {
    5.0
}

fn default_num_grid_lines() -> usize {
    5
}

fn default_grid_color() -> ColorToken {
    ColorToken::from([0.7, 0.7, 0.7, 0.5])
}

fn default_grid_line_width() -> f64 {
    1.0
}

fn default_axis_line_width() -> f64 {
    1.5
}

fn default_dataset_transparency() -> f64 {
    0.3
}

fn default_dataset_line_width() -> f64 {
    1.5
}

fn default_marker_size() -> f64 {
    6.0
}

fn default_show_scale_values() -> bool {
    true
}

fn default_scale_value_label() -> TextStyle {
    TextStyle::sized(12.0)
}

fn default_scale_value_offset() -> f64 {
    15.0
}
