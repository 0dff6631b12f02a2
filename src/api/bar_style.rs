use serde::{Deserialize, Serialize};

use crate::core::{ColorToken, PaletteConfig};
use crate::render::LineStrokeStyle;

use super::TextStyle;

/// Whether values are printed on the bars or left to on-touch display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChartMode {
    /// A value label above each bar.
    #[default]
    Standard,
    /// No value labels; hosts read `BarMeta` on touch instead.
    Interactive,
}

/// Rotation applied to x-axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum XLabelRotation {
    #[default]
    None,
    /// Text rises towards the right, rotated 45 degrees counter-clockwise.
    LeftUp,
    /// Text falls towards the right, rotated 45 degrees clockwise.
    LeftDown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartStyle {
    #[serde(default)]
    pub palette: PaletteConfig,
    /// Horizontal gap between neighbouring bars, split evenly on both sides.
    #[serde(default)]
    pub bar_gap: f64,
    #[serde(default)]
    pub bar_radius: f64,
    /// Proportional space above the tallest bar.
    #[serde(default = "default_headroom")]
    pub headroom: f64,
    #[serde(default)]
    pub chart_mode: ChartMode,
    #[serde(default = "default_value_label")]
    pub value_label: TextStyle,
    #[serde(default = "default_value_label_offset")]
    pub value_label_offset: f64,
    #[serde(default = "default_axis_label")]
    pub axis_label: TextStyle,
    #[serde(default)]
    pub x_axis_label_rotation: XLabelRotation,
    #[serde(default = "default_x_axis_label_offset")]
    pub x_axis_label_offset: f64,
    #[serde(default)]
    pub y_axis_labels: bool,
    #[serde(default = "default_y_axis_label_offset")]
    pub y_axis_label_offset: f64,
    #[serde(default)]
    pub grid: bool,
    #[serde(default)]
    pub grid_style: LineStrokeStyle,
    #[serde(default = "default_grid_color")]
    pub grid_color: ColorToken,
    #[serde(default = "default_grid_line_width")]
    pub grid_line_width: f64,
    #[serde(default = "default_grid_divisions")]
    pub grid_divisions: usize,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_title_label")]
    pub title_label: TextStyle,
    #[serde(default = "default_title_offset")]
    pub title_offset: f64,
    #[serde(default = "default_no_data_text")]
    pub no_data_text: Option<String>,
    #[serde(default = "default_no_data_label")]
    pub no_data_label: TextStyle,
}

impl Default for BarChartStyle {
    fn default() -> Self {
        Self {
            palette: PaletteConfig::default(),
            bar_gap: 0.0,
            bar_radius: 0.0,
            headroom: default_headroom(),
            chart_mode: ChartMode::Standard,
            value_label: default_value_label(),
            value_label_offset: default_value_label_offset(),
            axis_label: default_axis_label(),
            x_axis_label_rotation: XLabelRotation::None,
            x_axis_label_offset: default_x_axis_label_offset(),
            y_axis_labels: false,
            y_axis_label_offset: default_y_axis_label_offset(),
            grid: false,
            grid_style: LineStrokeStyle::Solid,
            grid_color: default_grid_color(),
            grid_line_width: default_grid_line_width(),
            grid_divisions: default_grid_divisions(),
            title: None,
            title_label: default_title_label(),
            title_offset: default_title_offset(),
            no_data_text: default_no_data_text(),
            no_data_label: default_no_data_label(),
        }
    }
}

impl BarChartStyle {
    #[must_use]
    pub fn with_palette(mut self, palette: PaletteConfig) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_bar_gap(mut self, bar_gap: f64) -> Self {
        self.bar_gap = bar_gap;
        self
    }

    #[must_use]
    pub fn with_bar_radius(mut self, bar_radius: f64) -> Self {
        self.bar_radius = bar_radius;
        self
    }

    #[must_use]
    pub fn with_headroom(mut self, headroom: f64) -> Self {
        self.headroom = headroom;
        self
    }

    #[must_use]
    pub fn with_chart_mode(mut self, chart_mode: ChartMode) -> Self {
        self.chart_mode = chart_mode;
        self
    }

    #[must_use]
    pub fn with_x_axis_label_rotation(mut self, rotation: XLabelRotation) -> Self {
        self.x_axis_label_rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_y_axis_labels(mut self, enabled: bool) -> Self {
        self.y_axis_labels = enabled;
        self
    }

    /// Enables the horizontal grid with the given stroke pattern.
    #[must_use]
    pub fn with_grid(mut self, grid_style: LineStrokeStyle) -> Self {
        self.grid = true;
        self.grid_style = grid_style;
        self
    }

    #[must_use]
    pub fn with_grid_divisions(mut self, divisions: usize) -> Self {
        self.grid_divisions = divisions;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_no_data_text(mut self, text: Option<String>) -> Self {
        self.no_data_text = text;
        self
    }
}

pub(crate) fn default_no_data_text() -> Option<String> {
    Some("No data available".to_owned())
}

pub(crate) fn default_no_data_label() -> TextStyle {
    TextStyle::sized(20.0)
}

fn default_headroom() -> f64 {
    0.1
}

fn default_value_label() -> TextStyle {
    TextStyle::sized(14.0)
}

fn default_value_label_offset() -> f64 {
    5.0
}

fn default_axis_label() -> TextStyle {
    TextStyle::sized(14.0)
}

fn default_x_axis_label_offset() -> f64 {
    10.0
}

fn default_y_axis_label_offset() -> f64 {
    15.0
}

fn default_grid_color() -> ColorToken {
    ColorToken::from([0.5, 0.5, 0.5, 0.5])
}

fn default_grid_line_width() -> f64 {
    1.0
}

fn default_grid_divisions() -> usize {
    5
}

fn default_title_label() -> TextStyle {
    TextStyle::sized(16.0)
}

fn default_title_offset() -> f64 {
    10.0
}
