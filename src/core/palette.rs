use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::color::{Color, ColorToken};
use crate::error::ChartResult;

pub const BAR_DEFAULT_COLOR: &str = "#3498db";
pub const BAR_GRADIENT_COLORS: [&str; 2] = ["#33ff66", "#C3FF66"];
pub const PIE_PALETTE: [&str; 8] = [
    "#ffd92f", "#a6d854", "#e78ac3", "#8da0cb", "#fc8d62", "#66c2a5", "#d0d0d0", "#ffb8bc",
];
pub const RADAR_PALETTE: [&str; 6] = [
    "#1f77b4", "#d62728", "#2ca02c", "#ff7f0e", "#9467bd", "#8c564b",
];

/// Color assignment strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorStyle {
    /// Explicit list cycled by series index, or the default color for every series.
    #[default]
    Standard,
    /// Equally spaced samples along the gradient stops.
    Gradient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default)]
    pub color_style: ColorStyle,
    #[serde(default)]
    pub colors: Vec<ColorToken>,
    #[serde(default = "default_series_color")]
    pub default_color: ColorToken,
    #[serde(default = "default_gradient_colors")]
    pub gradient_colors: Vec<ColorToken>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            color_style: ColorStyle::Standard,
            colors: Vec::new(),
            default_color: default_series_color(),
            gradient_colors: default_gradient_colors(),
        }
    }
}

impl PaletteConfig {
    /// Standard palette cycling through `colors`.
    #[must_use]
    pub fn standard<T: Into<ColorToken>>(colors: impl IntoIterator<Item = T>) -> Self {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Gradient palette sampled across `stops`.
    #[must_use]
    pub fn gradient<T: Into<ColorToken>>(stops: impl IntoIterator<Item = T>) -> Self {
        Self {
            color_style: ColorStyle::Gradient,
            gradient_colors: stops.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_default_color(mut self, color: impl Into<ColorToken>) -> Self {
        self.default_color = color.into();
        self
    }

    pub(crate) fn pie_default() -> Self {
        Self::standard(PIE_PALETTE)
    }

    pub(crate) fn radar_default() -> Self {
        Self::standard(RADAR_PALETTE)
    }
}

fn default_series_color() -> ColorToken {
    ColorToken::hex(BAR_DEFAULT_COLOR)
}

fn default_gradient_colors() -> Vec<ColorToken> {
    BAR_GRADIENT_COLORS.into_iter().map(ColorToken::from).collect()
}

/// Concrete per-series colors for one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedColorSet {
    colors: Vec<Color>,
}

impl ResolvedColorSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for series `index`, cycling if the set is shorter than requested.
    #[must_use]
    pub fn get(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return Color::BLACK;
        }
        self.colors[index % self.colors.len()]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }
}

/// Resolves `series_count` colors from a palette configuration.
///
/// Every configured token is parsed before any color is produced, so a single
/// malformed entry fails the whole call even if it would not be used.
pub fn resolve_colors(config: &PaletteConfig, series_count: usize) -> ChartResult<ResolvedColorSet> {
    let colors = match config.color_style {
        ColorStyle::Gradient if config.gradient_colors.len() >= 2 => {
            let stops = parse_tokens(&config.gradient_colors)?;
            gradient_colors(&stops, series_count)
        }
        ColorStyle::Gradient => {
            warn!(
                stops = config.gradient_colors.len(),
                "gradient needs at least two stops; falling back to standard colors"
            );
            standard_colors(config, series_count)?
        }
        ColorStyle::Standard => standard_colors(config, series_count)?,
    };

    trace!(count = colors.len(), style = ?config.color_style, "resolved series colors");
    Ok(ResolvedColorSet { colors })
}

/// Samples a piecewise-linear gradient at `t` in `[0, 1]`.
///
/// `t` is scaled into `[0, stops - 1]` and interpolated between the two
/// surrounding stops. Out-of-range `t` is clamped.
#[must_use]
pub fn sample_gradient(stops: &[Color], t: f64) -> Color {
    match stops {
        [] => Color::BLACK,
        [only] => *only,
        _ => {
            let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
            let last_segment = stops.len() - 2;
            let scaled = t * (stops.len() - 1) as f64;
            let segment = (scaled.floor() as usize).min(last_segment);
            let local = scaled - segment as f64;
            stops[segment].lerp(stops[segment + 1], local)
        }
    }
}

fn gradient_colors(stops: &[Color], series_count: usize) -> Vec<Color> {
    match series_count {
        0 => Vec::new(),
        1 => vec![stops[0]],
        n => {
            let denominator = (n - 1) as f64;
            (0..n)
                .map(|i| sample_gradient(stops, i as f64 / denominator))
                .collect()
        }
    }
}

fn standard_colors(config: &PaletteConfig, series_count: usize) -> ChartResult<Vec<Color>> {
    let listed = parse_tokens(&config.colors)?;
    if listed.is_empty() {
        let fallback = config.default_color.resolve()?;
        return Ok(vec![fallback; series_count]);
    }
    Ok((0..series_count)
        .map(|i| listed[i % listed.len()])
        .collect())
}

fn parse_tokens(tokens: &[ColorToken]) -> ChartResult<Vec<Color>> {
    tokens.iter().map(ColorToken::resolve).collect()
}
