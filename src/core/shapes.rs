use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::Point;

/// Vertex storage for key shapes; the largest shape (star) has 10 vertices.
pub type ShapeVertices = SmallVec<[Point; 10]>;

/// Legend key and marker shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KeyShape {
    #[default]
    Circle,
    Square,
    Diamond,
    Hexagon,
    Star,
    /// Full width, half height.
    Rectangle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KeyStyle {
    #[default]
    Filled,
    Outlined,
}

impl KeyShape {
    /// Closed vertex set centred on `center`, `size` being the outer diameter
    /// (or side length). Vertices start at the top and run clockwise.
    ///
    /// Circles return no vertices: renderers draw them natively from the
    /// center and size.
    #[must_use]
    pub fn vertices(self, center: Point, size: f64) -> ShapeVertices {
        let radius = size * 0.5;
        match self {
            Self::Circle => ShapeVertices::new(),
            Self::Square => axis_aligned_box(center, size, size),
            Self::Rectangle => axis_aligned_box(center, size, size * 0.5),
            Self::Diamond => regular_polygon(center, radius, 4),
            Self::Hexagon => regular_polygon(center, radius, 6),
            Self::Star => star(center, radius, radius * 0.5, 5),
        }
    }
}

/// Regular polygon with its first vertex straight above `center`.
#[must_use]
pub fn regular_polygon(center: Point, radius: f64, sides: usize) -> ShapeVertices {
    let step = TAU / sides as f64;
    (0..sides)
        .map(|i| center.polar_offset(radius, i as f64 * step - FRAC_PI_2))
        .collect()
}

/// Star alternating between `outer` and `inner` radii, `2 * points` vertices.
#[must_use]
pub fn star(center: Point, outer: f64, inner: f64, points: usize) -> ShapeVertices {
    let step = PI / points as f64;
    (0..points * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            center.polar_offset(radius, i as f64 * step - FRAC_PI_2)
        })
        .collect()
}

fn axis_aligned_box(center: Point, width: f64, height: f64) -> ShapeVertices {
    let half_w = width * 0.5;
    let half_h = height * 0.5;
    let mut vertices = ShapeVertices::new();
    vertices.push(Point::new(center.x - half_w, center.y - half_h));
    vertices.push(Point::new(center.x + half_w, center.y - half_h));
    vertices.push(Point::new(center.x + half_w, center.y + half_h));
    vertices.push(Point::new(center.x - half_w, center.y + half_h));
    vertices
}
