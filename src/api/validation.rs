use tracing::debug;

/// Smallest stroke width or font size a layout pass emits.
pub(super) const MIN_COSMETIC_LENGTH: f64 = 0.1;
/// Largest stroke width or font size a layout pass emits.
pub(super) const MAX_COSMETIC_LENGTH: f64 = 1_000.0;

/// Clamps a cosmetic parameter into `[min, max]`.
///
/// Out-of-range cosmetic values never fail a layout pass; NaN falls back to
/// `min`.
pub(super) fn clamp_cosmetic(name: &'static str, value: f64, min: f64, max: f64) -> f64 {
    let clamped = if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    };
    if clamped != value {
        debug!(parameter = name, value, clamped, "clamped cosmetic style value");
    }
    clamped
}

/// Clamps a cosmetic length to be non-negative.
pub(super) fn clamp_non_negative(name: &'static str, value: f64) -> f64 {
    clamp_cosmetic(name, value, 0.0, f64::MAX)
}

/// Stroke widths stay strictly positive and finite.
pub(super) fn clamp_stroke_width(name: &'static str, value: f64) -> f64 {
    clamp_cosmetic(name, value, MIN_COSMETIC_LENGTH, MAX_COSMETIC_LENGTH)
}

/// Font sizes stay strictly positive and finite.
pub(super) fn clamp_font_size(value: f64) -> f64 {
    clamp_cosmetic("font_size", value, MIN_COSMETIC_LENGTH, MAX_COSMETIC_LENGTH)
}
