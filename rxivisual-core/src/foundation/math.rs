/// Replace NaN and infinities with `fallback`.
#[inline]
pub(crate) fn finite_or(x: f64, fallback: f64) -> f64 {
    if x.is_finite() { x } else { fallback }
}

/// Clamp scalar value to normalized range `[0, 1]`. NaN maps to 0.
#[inline]
pub(crate) fn clamp01(x: f64) -> f64 {
    finite_or(x, 0.0).clamp(0.0, 1.0)
}

/// Clamp a length to `>= 0`. NaN and negative values map to 0.
#[inline]
pub(crate) fn non_negative(x: f64) -> f64 {
    if x.is_finite() { x.max(0.0) } else { 0.0 }
}

#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
