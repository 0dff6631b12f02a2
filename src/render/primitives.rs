use serde::{Deserialize, Serialize};

use crate::core::{Color, KeyShape, KeyStyle, Point, ShapeVertices};
use crate::error::{ChartError, ChartResult};

/// Data carried by a bar so hosts can show its value on touch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarMeta {
    pub index: usize,
    pub label: String,
    pub value: f64,
}

/// Axis-aligned rectangle with optional rounded corners.
///
/// `y` is the top edge; the rectangle extends down by `height`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub color: Color,
    #[serde(default)]
    pub meta: Option<BarMeta>,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            corner_radius: 0.0,
            color,
            meta: None,
        }
    }

    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub fn with_meta(mut self, meta: BarMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Inclusive hit test used for on-touch value display.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn validate(&self) -> ChartResult<()> {
        if ![self.x, self.y, self.width, self.height, self.corner_radius]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ChartError::InvalidData(
                "rectangle geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rectangle size and corner radius must be >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Annular sector. A zero inner radius is a plain pie slice; a full sweep is
/// a disc (or ring).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WedgePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Radians, clockwise from the +x axis.
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub color: Color,
}

impl WedgePrimitive {
    /// Full-turn disc of `radius` around `center`.
    #[must_use]
    pub fn disc(center: Point, radius: f64, color: Color) -> Self {
        Self {
            cx: center.x,
            cy: center.y,
            inner_radius: 0.0,
            outer_radius: radius,
            start_angle: 0.0,
            sweep_angle: std::f64::consts::TAU,
            color,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if ![
            self.cx,
            self.cy,
            self.inner_radius,
            self.outer_radius,
            self.start_angle,
            self.sweep_angle,
        ]
        .iter()
        .all(|v| v.is_finite())
        {
            return Err(ChartError::InvalidData(
                "wedge geometry must be finite".to_owned(),
            ));
        }
        if self.inner_radius < 0.0 || self.outer_radius < self.inner_radius {
            return Err(ChartError::InvalidData(
                "wedge radii must satisfy 0 <= inner <= outer".to_owned(),
            ));
        }
        if self.sweep_angle < 0.0 {
            return Err(ChartError::InvalidData(
                "wedge sweep must be >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Closed polygon with independent stroke and fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub vertices: Vec<Point>,
    pub stroke_color: Option<Color>,
    pub stroke_width: f64,
    /// Fill color; its alpha already equals `fill_alpha`.
    pub fill_color: Option<Color>,
    pub fill_alpha: f64,
}

impl PolygonPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self.vertices.iter().any(|v| !v.is_finite()) {
            return Err(ChartError::InvalidData(
                "polygon vertices must be finite".to_owned(),
            ));
        }
        if self.stroke_color.is_some() && !(self.stroke_width.is_finite() && self.stroke_width > 0.0)
        {
            return Err(ChartError::InvalidData(
                "polygon stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&self.fill_alpha) {
            return Err(ChartError::InvalidData(
                "polygon fill alpha must be in [0, 1]".to_owned(),
            ));
        }
        for color in self.stroke_color.iter().chain(self.fill_color.iter()) {
            color.validate()?;
        }
        Ok(())
    }
}

/// Stroke pattern for grid and axis lines.
///
/// The pattern is an attribute; renderers do the segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStrokeStyle {
    /// Alternating on/off lengths, empty for solid lines.
    #[must_use]
    pub fn dash_pattern(self) -> &'static [f64] {
        match self {
            Self::Solid => &[],
            Self::Dashed => &[10.0, 10.0],
            Self::Dotted => &[1.0, 9.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridPath {
    Polyline { points: Vec<Point>, closed: bool },
    Circle { center: Point, radius: f64 },
}

/// Grid ring, grid line or axis line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLinePrimitive {
    pub path: GridPath,
    pub style: LineStrokeStyle,
    pub color: Color,
    pub width: f64,
}

impl GridLinePrimitive {
    #[must_use]
    pub fn segment(from: Point, to: Point, color: Color, width: f64) -> Self {
        Self {
            path: GridPath::Polyline {
                points: vec![from, to],
                closed: false,
            },
            style: LineStrokeStyle::Solid,
            color,
            width,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: LineStrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        match &self.path {
            GridPath::Polyline { points, .. } => {
                if points.len() < 2 || points.iter().any(|p| !p.is_finite()) {
                    return Err(ChartError::InvalidData(
                        "grid polyline needs at least two finite points".to_owned(),
                    ));
                }
            }
            GridPath::Circle { center, radius } => {
                if !center.is_finite() || !radius.is_finite() || *radius < 0.0 {
                    return Err(ChartError::InvalidData(
                        "grid circle must be finite with radius >= 0".to_owned(),
                    ));
                }
            }
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "grid line width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `LabelAnchor::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `LabelAnchor::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

/// Positioned, unshaped label text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Radians, clockwise, about `(x, y)`.
    pub rotation: f64,
    pub color: Color,
    pub font_size: f64,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
    /// Wrap width for backends that shape text; `None` means a single line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    /// Line limit when wrapping; overflow is shortened by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<u32>,
}

impl LabelAnchor {
    /// Centered, unrotated label.
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, font_size: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            rotation: 0.0,
            color,
            font_size,
            h_align: TextHAlign::Center,
            v_align: TextVAlign::Middle,
            max_width: None,
            max_lines: None,
        }
    }

    #[must_use]
    pub fn wrapped(mut self, max_width: f64, max_lines: u32) -> Self {
        self.max_width = Some(max_width);
        self.max_lines = Some(max_lines);
        self
    }

    #[must_use]
    pub fn aligned(mut self, h_align: TextHAlign, v_align: TextVAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    #[must_use]
    pub fn rotated(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "label text must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation.is_finite() {
            return Err(ChartError::InvalidData(
                "label anchor must be finite".to_owned(),
            ));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if self
            .max_width
            .is_some_and(|width| !width.is_finite() || width < 0.0)
        {
            return Err(ChartError::InvalidData(
                "label wrap width must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Legend swatch: shape, centre, size and its closed vertex set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendKeyPrimitive {
    pub shape: KeyShape,
    /// Centre of the key.
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Color,
    pub style: KeyStyle,
    pub vertices: ShapeVertices,
}

impl LegendKeyPrimitive {
    #[must_use]
    pub fn new(shape: KeyShape, center: Point, size: f64, color: Color, style: KeyStyle) -> Self {
        Self {
            shape,
            x: center.x,
            y: center.y,
            size,
            color,
            style,
            vertices: shape.vertices(center, size),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() || !self.size.is_finite() || self.size <= 0.0
        {
            return Err(ChartError::InvalidData(
                "legend key must be finite with size > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Every primitive kind the engine produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeometryPrimitive {
    Rectangle(RectPrimitive),
    Wedge(WedgePrimitive),
    Polygon(PolygonPrimitive),
    Marker(WedgePrimitive),
    GridLine(GridLinePrimitive),
    Label(LabelAnchor),
    LegendKey(LegendKeyPrimitive),
}
