use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(token: &str) -> ChartResult<Self> {
        let Some(digits) = token.strip_prefix('#') else {
            return Err(ChartError::invalid_color(
                token,
                "hex colors must start with `#`",
            ));
        };
        if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChartError::invalid_color(
                token,
                "expected #RRGGBB or #RRGGBBAA",
            ));
        }

        let channel = |index: usize| -> ChartResult<f64> {
            let pair = &digits[index * 2..index * 2 + 2];
            u8::from_str_radix(pair, 16)
                .map(|byte| f64::from(byte) / 255.0)
                .map_err(|err| ChartError::invalid_color(token, err.to_string()))
        };

        let alpha = if digits.len() == 8 { channel(3)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(1)?, channel(2)?, alpha))
    }

    /// Builds a color from a 4-component tuple, each component in `[0, 1]`.
    pub fn from_components(components: &[f64]) -> ChartResult<Self> {
        let token = || format!("{components:?}");
        let [red, green, blue, alpha] = components else {
            return Err(ChartError::invalid_color(
                token(),
                format!("expected 4 RGBA components, got {}", components.len()),
            ));
        };
        let color = Self::rgba(*red, *green, *blue, *alpha);
        color
            .validate()
            .map_err(|err| ChartError::invalid_color(token(), err.to_string()))?;
        Ok(color)
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Linear RGBA interpolation. `t = 0` and `t = 1` return the endpoints exactly.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a * (1.0 - t) + b * t;
        Self::rgba(
            mix(self.red, other.red),
            mix(self.green, other.green),
            mix(self.blue, other.blue),
            mix(self.alpha, other.alpha),
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// A color as written in configuration: a hex string or an RGBA tuple.
///
/// Tokens are parsed once at the input boundary with [`ColorToken::resolve`];
/// everything downstream works on [`Color`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorToken {
    Hex(String),
    Rgba(Vec<f64>),
}

impl ColorToken {
    #[must_use]
    pub fn hex(value: impl Into<String>) -> Self {
        Self::Hex(value.into())
    }

    pub fn resolve(&self) -> ChartResult<Color> {
        match self {
            Self::Hex(value) => Color::from_hex(value.trim()),
            Self::Rgba(components) => Color::from_components(components),
        }
    }
}

impl From<Color> for ColorToken {
    fn from(color: Color) -> Self {
        Self::Rgba(vec![color.red, color.green, color.blue, color.alpha])
    }
}

impl From<&str> for ColorToken {
    fn from(value: &str) -> Self {
        Self::Hex(value.to_owned())
    }
}

impl From<[f64; 4]> for ColorToken {
    fn from(value: [f64; 4]) -> Self {
        Self::Rgba(value.to_vec())
    }
}
