//! Numeric helpers shared by the mapper and the progress reporter.

/// Round `value` to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// `floor(fraction * 100)` clamped to `0..=100`.
pub fn floor_percent(fraction: f64) -> u8 {
    (fraction * 100.0).floor().clamp(0.0, 100.0) as u8
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
