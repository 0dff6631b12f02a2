use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear value-to-length mapping over `[domain_start, domain_end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Radar-style scale: `0` maps to the center, `max_value` to the full radius.
    pub fn radar(max_value: f64) -> ChartResult<Self> {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(ChartError::InvalidData(
                "radar max value must be finite and > 0".to_owned(),
            ));
        }
        Self::new(0.0, max_value)
    }

    /// Infers a zero-anchored domain from data with proportional headroom.
    ///
    /// The domain always contains zero so bars grow from a shared baseline.
    /// Returns `None` when every value is zero (or `values` is empty).
    pub fn auto_from_values(values: &[f64], headroom: f64) -> ChartResult<Option<Self>> {
        let Some((min, max)) = value_extremes(values)? else {
            return Ok(None);
        };
        let factor = 1.0 + headroom.max(0.0);
        let low = min.min(0.0) * factor;
        let high = max.max(0.0) * factor;
        if low == high {
            return Ok(None);
        }
        Self::new(low, high).map(Some)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.domain_end - self.domain_start
    }

    /// Position of `value` inside the domain, `0` at the start and `1` at the end.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        (value - self.domain_start) / self.span()
    }

    /// Length covered by `value` measured from zero, for a full `extent`.
    #[must_use]
    pub fn to_length(self, value: f64, extent: f64) -> f64 {
        value / self.span() * extent
    }

    /// Same as [`LinearScale::to_length`] with `value` clamped into the domain.
    #[must_use]
    pub fn to_length_clamped(self, value: f64, extent: f64) -> f64 {
        let (low, high) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };
        self.to_length(value.clamp(low, high), extent)
    }
}

/// Returns `(min, max)` of finite values, `None` for an empty slice.
pub fn value_extremes(values: &[f64]) -> ChartResult<Option<(f64, f64)>> {
    if values.is_empty() {
        return Ok(None);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values.iter().copied() {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("values must be finite".to_owned()));
        }
        min = min.min(value);
        max = max.max(value);
    }
    Ok(Some((min, max)))
}

/// Angular span of one proportional slice, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularSpan {
    pub start_angle: f64,
    pub sweep_angle: f64,
    /// Share of the total in `[0, 1]`.
    pub fraction: f64,
}

impl AngularSpan {
    #[must_use]
    pub fn mid_angle(self) -> f64 {
        self.start_angle + self.sweep_angle * 0.5
    }

    #[must_use]
    pub fn end_angle(self) -> f64 {
        self.start_angle + self.sweep_angle
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionalSpans {
    pub spans: Vec<AngularSpan>,
    /// Sum of the raw values; infinite when it overflows `f64`.
    pub total: f64,
}

impl ProportionalSpans {
    /// `true` when the values sum to zero and every sweep collapsed.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.total == 0.0
    }
}

/// Splits a full turn starting at `base_angle` proportionally to `values`.
///
/// Each boundary is derived from the running cumulative sum divided by the
/// total rather than by adding sweeps, so many small slices do not drift.
/// Values are divided by their maximum before accumulating, so totals beyond
/// the `f64` range still produce finite angles.
pub fn proportional_spans(values: &[f64], base_angle: f64) -> ChartResult<ProportionalSpans> {
    let mut total = 0.0;
    let mut max = 0.0f64;
    for value in values.iter().copied() {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(
                "proportional values must be finite and >= 0".to_owned(),
            ));
        }
        total += value;
        max = max.max(value);
    }

    if max == 0.0 {
        let spans = values
            .iter()
            .map(|_| AngularSpan {
                start_angle: base_angle,
                sweep_angle: 0.0,
                fraction: 0.0,
            })
            .collect();
        return Ok(ProportionalSpans { spans, total: 0.0 });
    }

    let scaled: Vec<f64> = values.iter().map(|value| value / max).collect();
    let scaled_total: f64 = scaled.iter().sum();
    let mut spans = Vec::with_capacity(values.len());
    let mut cumulative = 0.0;
    for value in scaled {
        let start_angle = base_angle + TAU * (cumulative / scaled_total);
        cumulative += value;
        let end_angle = base_angle + TAU * (cumulative / scaled_total);
        spans.push(AngularSpan {
            start_angle,
            sweep_angle: end_angle - start_angle,
            fraction: value / scaled_total,
        });
    }

    Ok(ProportionalSpans { spans, total })
}
