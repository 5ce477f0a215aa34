//! Exponential moving average for per-frame joint angles
//!
//! Damps pose estimator jitter without a history buffer. The caller owns
//! the previous value and feeds it back on the next frame.

/// Weight of the newest sample (history gets the remaining 0.6)
pub const SMOOTHING_ALPHA: f32 = 0.4;

/// Blend `current` into `previous`
///
/// Seeds itself: with no previous value (or a NaN one) the current
/// sample passes through unchanged.
pub fn smooth(current: f32, previous: Option<f32>) -> f32 {
    match previous {
        Some(prev) if !prev.is_nan() => {
            SMOOTHING_ALPHA * current + (1.0 - SMOOTHING_ALPHA) * prev
        }
        _ => current,
    }
}
