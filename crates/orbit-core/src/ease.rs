//! Easing and interpolation helpers

use crate::constants::MIN_DENOM;

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse lerp with a minimum-denominator guard; does not clamp
pub fn inv_lerp(a: f64, b: f64, v: f64) -> f64 {
    (v - a) / (b - a).max(MIN_DENOM)
}

/// Inverse lerp that supports reversed (a > b) ranges
pub fn inv_lerp_signed(a: f64, b: f64, v: f64) -> f64 {
    let mut den = b - a;
    if den.abs() < MIN_DENOM {
        den = if den >= 0.0 { MIN_DENOM } else { -MIN_DENOM };
    }
    (v - a) / den
}

/// Hermite smoothstep, clamped to [0, 1]
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Quartic ease-out, clamped to [0, 1]
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(4)
}

/// C2-matched quintic blend with end slope `k`.
///
/// Satisfies w(0) = w'(0) = w''(0) = 0, w(1) = 1, w'(1) = k, w''(1) = 0:
/// a segment eased by it starts at rest and hands off at `k` times its
/// average rate, so the approach leg can meet the orbit without a visible
/// speed jump.
pub fn quintic_blend(t: f64, k: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let t3 = t * t * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    (6.0 - 3.0 * k) * t5 + (7.0 * k - 15.0) * t4 + (10.0 - 4.0 * k) * t3
}
