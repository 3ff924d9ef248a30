//! Rendering of computed values back into text.

use crate::token::Token;

/// Shortest decimal form of `value` that reads back to the same `f64`.
///
/// Negative zero renders as `0`, and large magnitudes are written out in
/// full rather than in exponent notation.
pub fn render(value: f64) -> String {
    // -0.0 + 0.0 == +0.0
    format!("{}", value + 0.0)
}

/// Zero-pad `rendered` so its digits are at least as wide as the digits of
/// the literal it replaces. The sign stays in front of the padding.
pub fn pad_to_width(rendered: String, original: &Token<'_>) -> String {
    let width = original.digits().len();
    let (sign, magnitude) = match rendered.strip_prefix('-') {
        Some(magnitude) => ("-", magnitude),
        None => ("", rendered.as_str()),
    };
    if magnitude.len() >= width {
        return rendered;
    }
    format!("{sign}{magnitude:0>width$}")
}

/// Most decimals an `f64` carries meaningfully.
pub const MAX_PRECISION: u32 = 15;

/// Round `value` to `precision` decimals, at most [`MAX_PRECISION`].
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    (value * factor).round() / factor
}

/// Number of fractional digits written in a user supplied number, e.g.
/// `0.25` has two. Integers and exponent forms have none. Capped at
/// [`MAX_PRECISION`].
pub fn precision_of(input: &str) -> Option<u32> {
    let input = input.trim();
    if input.contains(['e', 'E']) {
        return None;
    }
    let (_, fraction) = input.split_once('.')?;
    match fraction.len() {
        0 => None,
        n => Some(u32::try_from(n).map_or(MAX_PRECISION, |n| n.min(MAX_PRECISION))),
    }
}
