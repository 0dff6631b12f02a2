use serde::{Deserialize, Serialize};

use crate::core::{Color, ColorToken, KeyShape, KeyStyle, PaletteConfig};

use super::bar_style::{default_no_data_label, default_no_data_text};
use super::{LegendAlign, LegendSide, StackMetrics, TextStyle};

/// Legend column shown beside a pie or donut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieLegendStyle {
    #[serde(default)]
    pub show: bool,
    #[serde(default)]
    pub side: LegendSide,
    #[serde(default)]
    pub align: LegendAlign,
    #[serde(default)]
    pub key_shape: KeyShape,
    #[serde(default)]
    pub key_style: KeyStyle,
    #[serde(default = "default_legend_label")]
    pub label: TextStyle,
    #[serde(default)]
    pub metrics: StackMetrics,
}

impl Default for PieLegendStyle {
    fn default() -> Self {
        Self {
            show: false,
            side: LegendSide::Left,
            align: LegendAlign::Center,
            key_shape: KeyShape::Circle,
            key_style: KeyStyle::Filled,
            label: default_legend_label(),
            metrics: StackMetrics::default(),
        }
    }
}

impl PieLegendStyle {
    /// Visible legend on `side`.
    #[must_use]
    pub fn shown(side: LegendSide) -> Self {
        Self {
            show: true,
            side,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_align(mut self, align: LegendAlign) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn with_key(mut self, shape: KeyShape, style: KeyStyle) -> Self {
        self.key_shape = shape;
        self.key_style = style;
        self
    }
}

/// Turns a pie into a donut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutStyle {
    /// Inner radius as a fraction of the outer radius, clamped to `[0.2, 0.8]`.
    #[serde(default = "default_donut_radius")]
    pub donut_radius: f64,
    #[serde(default = "default_hole_color")]
    pub hole_color: ColorToken,
    #[serde(default)]
    pub center_text: Option<String>,
    #[serde(default = "default_center_label")]
    pub center_label: TextStyle,
    /// Most lines the center text may wrap onto inside the hole.
    #[serde(default = "default_center_text_lines")]
    pub center_text_lines: u32,
}

impl Default for DonutStyle {
    fn default() -> Self {
        Self {
            donut_radius: default_donut_radius(),
            hole_color: default_hole_color(),
            center_text: None,
            center_label: default_center_label(),
            center_text_lines: default_center_text_lines(),
        }
    }
}

impl DonutStyle {
    #[must_use]
    pub fn with_donut_radius(mut self, donut_radius: f64) -> Self {
        self.donut_radius = donut_radius;
        self
    }

    #[must_use]
    pub fn with_hole_color(mut self, color: impl Into<ColorToken>) -> Self {
        self.hole_color = color.into();
        self
    }

    #[must_use]
    pub fn with_center_text(mut self, text: impl Into<String>) -> Self {
        self.center_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_center_text_lines(mut self, lines: u32) -> Self {
        self.center_text_lines = lines;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartStyle {
    #[serde(default = "PaletteConfig::pie_default")]
    pub palette: PaletteConfig,
    /// Space kept between the outer radius and the chart area edge.
    #[serde(default = "default_chart_margin")]
    pub chart_margin: f64,
    #[serde(default = "default_percentage_label")]
    pub percentage_label: TextStyle,
    /// Where along the radius (or donut band) percentage labels sit, in `[0, 1]`.
    #[serde(default = "default_percentage_distance_factor")]
    pub percentage_distance_factor: f64,
    #[serde(default)]
    pub legend: PieLegendStyle,
    #[serde(default)]
    pub donut: Option<DonutStyle>,
    #[serde(default = "default_no_data_text")]
    pub no_data_text: Option<String>,
    #[serde(default = "default_no_data_label")]
    pub no_data_label: TextStyle,
}

impl Default for PieChartStyle {
    fn default() -> Self {
        Self {
            palette: PaletteConfig::pie_default(),
            chart_margin: default_chart_margin(),
            percentage_label: default_percentage_label(),
            percentage_distance_factor: default_percentage_distance_factor(),
            legend: PieLegendStyle::default(),
            donut: None,
            no_data_text: default_no_data_text(),
            no_data_label: default_no_data_label(),
        }
    }
}

impl PieChartStyle {
    /// Donut chart with default hole settings.
    #[must_use]
    pub fn donut() -> Self {
        Self {
            donut: Some(DonutStyle::default()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_palette(mut self, palette: PaletteConfig) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_percentage_distance_factor(mut self, factor: f64) -> Self {
        self.percentage_distance_factor = factor;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: PieLegendStyle) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_donut(mut self, donut: DonutStyle) -> Self {
        self.donut = Some(donut);
        self
    }

    #[must_use]
    pub fn with_chart_margin(mut self, margin: f64) -> Self {
        self.chart_margin = margin;
        self
    }
}

fn default_legend_label() -> TextStyle {
    TextStyle::sized(14.0)
}

fn default_donut_radius() -> f64 {
    0.5
}

fn default_hole_color() -> ColorToken {
    ColorToken::from(Color::WHITE)
}

fn default_center_label() -> TextStyle {
    TextStyle::sized(14.0)
}

fn default_center_text_lines() -> u32 {
    2
}

fn default_chart_margin() -> f64 {
    10.0
}

fn default_percentage_label() -> TextStyle {
    TextStyle::sized(14.0)
}

fn default_percentage_distance_factor() -> f64 {
    0.5
}
