/// Clamp a progress-like value into `[0, 1]`. NaN maps to `0`.
pub fn clamp01(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Sub-range remap: how far `t` has progressed through `[start, start + len]`, clamped.
///
/// A non-positive `len` is a step at `start`.
pub fn remap01(t: f64, start: f64, len: f64) -> f64 {
    if len <= 0.0 {
        return if t >= start { 1.0 } else { 0.0 };
    }
    if t >= start + len {
        return 1.0;
    }
    clamp01((t - start) / len)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
