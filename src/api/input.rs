use serde::{Deserialize, Serialize};

use crate::core::{Dataset, Region, SeriesValues};
use crate::error::{ChartError, ChartResult};

use super::ChartStyle;

/// Immutable snapshot of everything one layout pass reads.
///
/// `categories` is only consulted by radar charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutInput {
    #[serde(default)]
    pub data: Dataset,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub style: ChartStyle,
    pub region: Region,
}

impl LayoutInput {
    #[must_use]
    pub fn new(style: impl Into<ChartStyle>, region: Region) -> Self {
        Self {
            data: Dataset::new(),
            categories: Vec::new(),
            style: style.into(),
            region,
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: Dataset) -> Self {
        self.data = data;
        self
    }

    /// Appends one labelled entry, keeping insertion order.
    #[must_use]
    pub fn with_entry(mut self, label: impl Into<String>, values: impl Into<SeriesValues>) -> Self {
        self.data.insert(label.into(), values.into());
        self
    }

    #[must_use]
    pub fn with_categories<S: Into<String>>(
        mut self,
        categories: impl IntoIterator<Item = S>,
    ) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Parses an input snapshot from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse layout input: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize layout input: {e}")))
    }
}
