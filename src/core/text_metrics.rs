/// Text extent estimation used where layout depends on label size.
///
/// Shaping is left to the renderer; layout only needs a deterministic
/// estimate. Hosts with real font metrics can supply their own measurer.
pub trait TextMeasurer {
    /// Estimated advance width of `text` at `font_size`.
    fn text_width(&self, text: &str, font_size: f64) -> f64;
}

/// Per-glyph-class width estimate; backend independent and deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        units * font_size
    }
}

/// Formats a data value the way it is shown on value labels: integral values
/// without a fractional part, everything else in shortest round-trip form.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Formats a scale/axis tick value: integers stay integral, others get at
/// most two decimals with trailing zeros removed.
#[must_use]
pub fn format_tick(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        return format_value(rounded);
    }
    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').to_owned()
}
