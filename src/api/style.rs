use serde::{Deserialize, Serialize};

use crate::core::{Color, ColorToken};
use crate::error::ChartResult;

use super::validation::clamp_font_size;
use super::{BarChartStyle, PieChartStyle, RadarChartStyle};

/// Font size and color for one class of labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: f64,
    #[serde(default = "default_text_color")]
    pub color: ColorToken,
}

impl TextStyle {
    /// Black text at `font_size`.
    #[must_use]
    pub fn sized(font_size: f64) -> Self {
        Self {
            font_size,
            color: default_text_color(),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<ColorToken>) -> Self {
        self.color = color.into();
        self
    }

    /// Font size clamped to a drawable range, plus the resolved color.
    pub(crate) fn resolve(&self) -> ChartResult<(f64, Color)> {
        Ok((clamp_font_size(self.font_size), self.color.resolve()?))
    }
}

pub(crate) fn default_text_color() -> ColorToken {
    ColorToken::from(Color::BLACK)
}

/// Style bundle for one chart family.
///
/// Serialized with an internal `kind` tag so a host can load any chart from
/// one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartStyle {
    Bar(BarChartStyle),
    Pie(PieChartStyle),
    Radar(RadarChartStyle),
}

impl ChartStyle {
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bar(_) => "bar",
            Self::Pie(style) if style.donut.is_some() => "donut",
            Self::Pie(_) => "pie",
            Self::Radar(_) => "radar",
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::Bar(BarChartStyle::default())
    }
}

impl From<BarChartStyle> for ChartStyle {
    fn from(style: BarChartStyle) -> Self {
        Self::Bar(style)
    }
}

impl From<PieChartStyle> for ChartStyle {
    fn from(style: PieChartStyle) -> Self {
        Self::Pie(style)
    }
}

impl From<RadarChartStyle> for ChartStyle {
    fn from(style: RadarChartStyle) -> Self {
        Self::Radar(style)
    }
}
