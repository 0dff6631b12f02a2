use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};

/// Values attached to one label: a scalar for bar/pie charts, a sequence
/// aligned to categories for radar charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesValues {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl From<f64> for SeriesValues {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for SeriesValues {
    fn from(values: Vec<f64>) -> Self {
        Self::Sequence(values)
    }
}

/// Insertion-ordered mapping from label to values.
pub type Dataset = IndexMap<String, SeriesValues>;

/// Builds a dataset from `(label, values)` pairs, keeping their order.
pub fn dataset_from<L, V>(entries: impl IntoIterator<Item = (L, V)>) -> Dataset
where
    L: Into<String>,
    V: Into<SeriesValues>,
{
    entries
        .into_iter()
        .map(|(label, values)| (label.into(), values.into()))
        .collect()
}

/// One labelled scalar, in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledValue<'a> {
    pub label: &'a str,
    pub value: f64,
}

/// One named radar series after reconciliation against the categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Extracts scalar entries, rejecting sequences and non-finite values.
pub fn scalar_entries(data: &Dataset) -> ChartResult<Vec<LabeledValue<'_>>> {
    data.iter()
        .map(|(label, values)| match values {
            SeriesValues::Scalar(value) if value.is_finite() => Ok(LabeledValue {
                label: label.as_str(),
                value: *value,
            }),
            SeriesValues::Scalar(_) => Err(ChartError::InvalidData(format!(
                "value for `{label}` must be finite"
            ))),
            SeriesValues::Sequence(_) => Err(ChartError::InvalidData(format!(
                "`{label}` must map to a single number"
            ))),
        })
        .collect()
}

/// Deduplicates categories, keeping the first occurrence of each name.
#[must_use]
pub fn normalize_categories(categories: &[String]) -> Vec<String> {
    let unique: IndexSet<&str> = categories.iter().map(String::as_str).collect();
    if unique.len() != categories.len() {
        warn!(
            requested = categories.len(),
            kept = unique.len(),
            "dropping duplicate radar categories"
        );
    }
    unique.into_iter().map(str::to_owned).collect()
}

/// Reconciliation policy for radar series whose length differs from the
/// category count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdjustPolicy {
    /// Mismatched lengths are an error.
    Strict,
    /// Pad missing trailing values with `fill`, truncate extra values.
    PadOrTruncate { fill: f64 },
}

/// Validates and reconciles every radar series against `category_count`.
///
/// All series are reconciled before any of them is returned, so a failure
/// never leaves a partially adjusted set behind. Values, including any padding
/// fill, must be finite and non-negative.
pub fn reconcile_series(
    data: &Dataset,
    category_count: usize,
    policy: AdjustPolicy,
) -> ChartResult<Vec<RadarSeries>> {
    let mut reconciled = Vec::with_capacity(data.len());
    for (name, values) in data {
        let SeriesValues::Sequence(values) = values else {
            return Err(ChartError::InvalidData(format!(
                "radar dataset `{name}` must map to a list of numbers"
            )));
        };
        if let Some(bad) = values.iter().find(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "radar dataset `{name}` contains non-finite value {bad}"
            )));
        }

        let values = match policy {
            _ if values.len() == category_count => values.clone(),
            AdjustPolicy::Strict => {
                return Err(ChartError::DataCategoryMismatch {
                    dataset: name.clone(),
                    expected: category_count,
                    actual: values.len(),
                });
            }
            AdjustPolicy::PadOrTruncate { fill } => {
                debug!(
                    dataset = name.as_str(),
                    from = values.len(),
                    to = category_count,
                    "adjusting radar dataset length"
                );
                let mut adjusted: Vec<f64> = values.iter().copied().take(category_count).collect();
                adjusted.resize(category_count, fill);
                adjusted
            }
        };

        if let Some(negative) = values.iter().find(|value| **value < 0.0) {
            return Err(ChartError::InvalidData(format!(
                "radar dataset `{name}` must be >= 0, got {negative}"
            )));
        }

        reconciled.push(RadarSeries {
            name: name.clone(),
            values,
        });
    }
    Ok(reconciled)
}
