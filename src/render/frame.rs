use serde::{Deserialize, Serialize};

use crate::core::Region;
use crate::error::ChartResult;
use crate::render::{
    GeometryPrimitive, GridLinePrimitive, LabelAnchor, LegendKeyPrimitive, PolygonPrimitive,
    RectPrimitive, WedgePrimitive,
};

/// Input shapes that produce no meaningful chart geometry.
///
/// These are reported on the frame instead of failing the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateInput {
    EmptyDataset,
    ZeroTotal,
    ZeroRange,
    NoCategories,
}

/// Backend-agnostic geometry for one chart layout pass, partitioned by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutFrame {
    pub region: Region,
    #[serde(default)]
    pub bars: Vec<RectPrimitive>,
    #[serde(default)]
    pub grid_lines: Vec<GridLinePrimitive>,
    /// Pie/donut wedges; a donut hole is always last.
    #[serde(default)]
    pub wedges: Vec<WedgePrimitive>,
    #[serde(default)]
    pub polygons: Vec<PolygonPrimitive>,
    /// Radar vertex markers, painted over the dataset polygons.
    #[serde(default)]
    pub markers: Vec<WedgePrimitive>,
    #[serde(default)]
    pub labels: Vec<LabelAnchor>,
    #[serde(default)]
    pub legend_keys: Vec<LegendKeyPrimitive>,
    #[serde(default)]
    pub degenerate: Option<DegenerateInput>,
}

impl LayoutFrame {
    #[must_use]
    pub fn new(region: Region) -> Self {
        Self {
            region,
            bars: Vec::new(),
            grid_lines: Vec::new(),
            wedges: Vec::new(),
            polygons: Vec::new(),
            markers: Vec::new(),
            labels: Vec::new(),
            legend_keys: Vec::new(),
            degenerate: None,
        }
    }

    #[must_use]
    pub fn with_degenerate(mut self, reason: DegenerateInput) -> Self {
        self.degenerate = Some(reason);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: LabelAnchor) -> Self {
        self.labels.push(label);
        self
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate.is_some()
    }

    /// Flattens every partition in paint order: grid lines, rectangles,
    /// wedges, polygons, markers, labels, legend keys.
    #[must_use]
    pub fn primitives(&self) -> Vec<GeometryPrimitive> {
        let mut out = Vec::with_capacity(self.primitive_count());
        out.extend(self.grid_lines.iter().cloned().map(GeometryPrimitive::GridLine));
        out.extend(self.bars.iter().cloned().map(GeometryPrimitive::Rectangle));
        out.extend(self.wedges.iter().copied().map(GeometryPrimitive::Wedge));
        out.extend(self.polygons.iter().cloned().map(GeometryPrimitive::Polygon));
        out.extend(self.markers.iter().copied().map(GeometryPrimitive::Marker));
        out.extend(self.labels.iter().cloned().map(GeometryPrimitive::Label));
        out.extend(
            self.legend_keys
                .iter()
                .cloned()
                .map(GeometryPrimitive::LegendKey),
        );
        out
    }

    /// Topmost bar under `(x, y)`, for hosts showing values on touch.
    #[must_use]
    pub fn bar_at(&self, x: f64, y: f64) -> Option<&RectPrimitive> {
        self.bars.iter().rev().find(|bar| bar.contains(x, y))
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.bars.len()
            + self.grid_lines.len()
            + self.wedges.len()
            + self.polygons.len()
            + self.markers.len()
            + self.labels.len()
            + self.legend_keys.len()
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.region.validate()?;

        for line in &self.grid_lines {
            line.validate()?;
        }
        for bar in &self.bars {
            bar.validate()?;
        }
        for wedge in &self.wedges {
            wedge.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }
        for key in &self.legend_keys {
            key.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}
