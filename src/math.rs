//! Numeric helpers shared by the conversion and interaction code.

/// Clamp `value` into `[min, max]`.
///
/// NaN collapses to `min`, so garbage input still lands inside the range.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// Round to `digits` decimal places, halves away from zero.
pub fn round(value: f64, digits: i32) -> f64 {
    let base = 10f64.powi(digits);
    (value * base).round() / base
}

/// Clamp and round a float channel into an 8-bit channel.
pub(crate) fn to_channel(value: f64) -> u8 {
    clamp(value, 0.0, 255.0).round() as u8
}
