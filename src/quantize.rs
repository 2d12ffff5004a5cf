//! Rounding lengths to manufacturable increments.
//!
//! Mat cutters work in eighths of an inch. Every coordinate the engine
//! produces (solver output, recentering, suggested borders) passes through
//! here so persisted geometry is always a whole number of steps.

use num_traits::Float;

/// Default manufacturing increment: 1/8 inch.
pub const QUANTIZE_STEP: f64 = 0.125;

/// Round `value` to the nearest multiple of `step`.
///
/// Ties round away from zero. A non-positive or non-finite `step` returns
/// `value` unchanged.
///
/// ```
/// use matlayout::quantize::{quantize, QUANTIZE_STEP};
///
/// assert_eq!(quantize(3.06, QUANTIZE_STEP), 3.0);
/// assert_eq!(quantize(3.0625, QUANTIZE_STEP), 3.125);
/// ```
pub fn quantize(value: f64, step: f64) -> f64 {
    if !usable_step(step) {
        return value;
    }
    Float::round(value / step) * step
}

/// Round `value` up to the next multiple of `step`.
///
/// Used where under-sizing would break a hard minimum, e.g. suggested mat
/// borders.
pub fn quantize_up(value: f64, step: f64) -> f64 {
    if !usable_step(step) {
        return value;
    }
    Float::ceil(value / step) * step
}

/// Whether `value` already lies on the `step` grid, within float noise.
pub fn is_quantized(value: f64, step: f64) -> bool {
    if !usable_step(step) {
        return true;
    }
    let ratio = value / step;
    Float::abs(ratio - Float::round(ratio)) < 1e-9
}

fn usable_step(step: f64) -> bool {
    step.is_finite() && step > 0.0
}
