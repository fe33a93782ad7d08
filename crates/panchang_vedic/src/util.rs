//! Shared angle utilities.

/// Normalize an angle to [0, 360) degrees.
///
/// Classification indices are only valid after this normalization; raw
/// adapter longitudes may be negative or exceed 360.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}
