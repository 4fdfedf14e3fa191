//! Scalar range helpers used to post-process noise output

use crate::noise::Real;

/// Linearly remap `value` from `[in_min, in_max]` to `[out_min, out_max]`
///
/// Values outside the input range are extrapolated, not clamped. A
/// degenerate input range divides by zero and yields a non-finite result.
#[inline]
pub fn map_value<T: Real>(value: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Clamp `x` into `[lo, hi]`
#[inline]
pub fn constrain_value<T: Real>(x: T, lo: T, hi: T) -> T {
    x.max(lo).min(hi)
}
