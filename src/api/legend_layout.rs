use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Color, KeyShape, KeyStyle, Point, Region, TextMeasurer};
use crate::render::{LabelAnchor, LegendKeyPrimitive, TextHAlign, TextVAlign};

use super::validation::{
    MAX_COSMETIC_LENGTH, MIN_COSMETIC_LENGTH, clamp_cosmetic, clamp_non_negative,
};

/// One legend row: series name and the color its key is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub name: String,
    pub color: Color,
}

impl LegendEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Side of the chart a legend column sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LegendSide {
    #[default]
    Left,
    Right,
}

/// Vertical placement of the legend block inside its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LegendAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Spacing for a vertically stacked legend column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackMetrics {
    pub item_height: f64,
    pub key_size: f64,
    /// Gap between the column's left edge and the key.
    pub key_inset: f64,
    pub key_label_gap: f64,
}

impl StackMetrics {
    /// Keys stay drawable and spacings non-negative.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            item_height: clamp_non_negative("item_height", self.item_height),
            key_size: clamp_key_size(self.key_size),
            key_inset: clamp_non_negative("key_inset", self.key_inset),
            key_label_gap: clamp_non_negative("key_label_gap", self.key_label_gap),
        }
    }
}

impl Default for StackMetrics {
    fn default() -> Self {
        Self {
            item_height: 30.0,
            key_size: 20.0,
            key_inset: 10.0,
            key_label_gap: 10.0,
        }
    }
}

/// Spacing for a legend that flows entries into centred rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowMetrics {
    pub key_size: f64,
    pub key_label_gap: f64,
    /// Gap between one entry's label and the next entry's key.
    pub element_spacing: f64,
    pub row_height: f64,
}

impl FlowMetrics {
    /// Keys stay drawable and spacings non-negative.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            key_size: clamp_key_size(self.key_size),
            key_label_gap: clamp_non_negative("key_label_gap", self.key_label_gap),
            element_spacing: clamp_non_negative("element_spacing", self.element_spacing),
            row_height: clamp_non_negative("row_height", self.row_height),
        }
    }
}

impl Default for FlowMetrics {
    fn default() -> Self {
        Self {
            key_size: 20.0,
            key_label_gap: 10.0,
            element_spacing: 20.0,
            row_height: 40.0,
        }
    }
}

/// Key shape and label text shared by every legend entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendAppearance {
    pub shape: KeyShape,
    pub key_style: KeyStyle,
    pub font_size: f64,
    pub label_color: Color,
}

/// Keys and labels produced for one legend, one of each per entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegendLayout {
    pub keys: Vec<LegendKeyPrimitive>,
    pub labels: Vec<LabelAnchor>,
}

impl LegendLayout {
    fn push(
        &mut self,
        entry: &LegendEntry,
        key_center: Point,
        label_x: f64,
        look: LegendAppearance,
        key_size: f64,
    ) {
        self.keys.push(LegendKeyPrimitive::new(
            look.shape,
            key_center,
            key_size,
            entry.color,
            look.key_style,
        ));
        if !entry.name.is_empty() {
            self.labels.push(
                LabelAnchor::new(
                    entry.name.clone(),
                    label_x,
                    key_center.y,
                    look.font_size,
                    look.label_color,
                )
                .aligned(TextHAlign::Left, TextVAlign::Middle),
            );
        }
    }
}

/// Stacks entries top to bottom in `column` with uniform item height, the
/// block aligned per `align`.
#[must_use]
pub fn stack_vertical(
    entries: &[LegendEntry],
    column: Region,
    align: LegendAlign,
    metrics: StackMetrics,
    look: LegendAppearance,
) -> LegendLayout {
    let metrics = metrics.clamped();
    let total_height = entries.len() as f64 * metrics.item_height;
    let block_top = align_block(column, total_height, align);
    let key_center_x = column.x + metrics.key_inset + metrics.key_size * 0.5;
    let label_x = column.x + metrics.key_inset + metrics.key_size + metrics.key_label_gap;

    let mut layout = LegendLayout::default();
    for (index, entry) in entries.iter().enumerate() {
        let center_y = block_top + (index as f64 + 0.5) * metrics.item_height;
        layout.push(
            entry,
            Point::new(key_center_x, center_y),
            label_x,
            look,
            metrics.key_size,
        );
    }
    trace!(entries = entries.len(), block_top, "stacked legend column");
    layout
}

/// Flows entries left to right into rows centred in `band`.
///
/// Every element is as wide as the widest label so columns line up across
/// rows; at least one element is placed per row even if it overflows.
#[must_use]
pub fn flow_rows(
    entries: &[LegendEntry],
    band: Region,
    align: LegendAlign,
    metrics: FlowMetrics,
    look: LegendAppearance,
    measurer: &dyn TextMeasurer,
) -> LegendLayout {
    let mut layout = LegendLayout::default();
    if entries.is_empty() {
        return layout;
    }
    let metrics = metrics.clamped();

    let widest_label = entries
        .iter()
        .map(|entry| measurer.text_width(&entry.name, look.font_size))
        .fold(0.0, f64::max);
    let element_width =
        metrics.key_size + metrics.key_label_gap + widest_label + metrics.element_spacing;
    let per_row = ((band.width / element_width).floor() as usize).max(1);
    let row_count = entries.len().div_ceil(per_row);
    let block_top = align_block(band, row_count as f64 * metrics.row_height, align);
    let band_center_x = band.center().x;

    for (row_index, row) in entries.chunks(per_row).enumerate() {
        let center_y = block_top + (row_index as f64 + 0.5) * metrics.row_height;
        let row_width = row.len() as f64 * element_width - metrics.element_spacing;
        let mut cursor_x = band_center_x - row_width * 0.5;
        for entry in row {
            layout.push(
                entry,
                Point::new(cursor_x + metrics.key_size * 0.5, center_y),
                cursor_x + metrics.key_size + metrics.key_label_gap,
                look,
                metrics.key_size,
            );
            cursor_x += element_width;
        }
    }
    trace!(
        entries = entries.len(),
        per_row,
        row_count,
        element_width,
        "flowed legend rows"
    );
    layout
}

fn clamp_key_size(key_size: f64) -> f64 {
    clamp_cosmetic("key_size", key_size, MIN_COSMETIC_LENGTH, MAX_COSMETIC_LENGTH)
}

fn align_block(area: Region, block_height: f64, align: LegendAlign) -> f64 {
    match align {
        LegendAlign::Top => area.y,
        LegendAlign::Center => area.y + (area.height - block_height) * 0.5,
        LegendAlign::Bottom => area.bottom() - block_height,
    }
}
