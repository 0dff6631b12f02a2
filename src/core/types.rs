use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Rectangular drawing area in device-independent units.
///
/// The origin is the top-left corner and `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    /// Creates a region anchored at the origin.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    #[must_use]
    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ChartError::InvalidRegion {
                width: self.width,
                height: self.height,
            })
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Radius of the largest circle centred in the region.
    #[must_use]
    pub fn inradius(self) -> f64 {
        self.width.min(self.height) * 0.5
    }

    /// Splits off a vertical band of `height` at the top, returning `(band, rest)`.
    #[must_use]
    pub fn split_top(self, height: f64) -> (Self, Self) {
        let height = height.clamp(0.0, self.height);
        let band = Self { height, ..self };
        let rest = Self {
            y: self.y + height,
            height: self.height - height,
            ..self
        };
        (band, rest)
    }

    /// Splits off a vertical band of `height` at the bottom, returning `(band, rest)`.
    #[must_use]
    pub fn split_bottom(self, height: f64) -> (Self, Self) {
        let height = height.clamp(0.0, self.height);
        let band = Self {
            y: self.bottom() - height,
            height,
            ..self
        };
        let rest = Self {
            height: self.height - height,
            ..self
        };
        (band, rest)
    }

    /// Splits off a column of `width` on the left, returning `(column, rest)`.
    #[must_use]
    pub fn split_left(self, width: f64) -> (Self, Self) {
        let width = width.clamp(0.0, self.width);
        let column = Self { width, ..self };
        let rest = Self {
            x: self.x + width,
            width: self.width - width,
            ..self
        };
        (column, rest)
    }

    /// Splits off a column of `width` on the right, returning `(column, rest)`.
    #[must_use]
    pub fn split_right(self, width: f64) -> (Self, Self) {
        let width = width.clamp(0.0, self.width);
        let column = Self {
            x: self.right() - width,
            width,
            ..self
        };
        let rest = Self {
            width: self.width - width,
            ..self
        };
        (column, rest)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` along `angle` (radians, clockwise on screen).
    #[must_use]
    pub fn polar_offset(self, radius: f64, angle: f64) -> Self {
        Self {
            x: self.x + radius * angle.cos(),
            y: self.y + radius * angle.sin(),
        }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
