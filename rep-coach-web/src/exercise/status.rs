//! Per-frame status handed back to the caller

use super::Stage;

/// Uniform HUD payload, whichever profile produced it
#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseStatus {
    pub stage: Stage,
    pub reps: u32,
    pub feedback: String,
    /// Smoothed primary angle, rounded to whole degrees
    pub angle: i32,
    /// Camera placement guidance
    pub instruction: Option<&'static str>,
    /// Display name of the angle being shown
    pub label: Option<&'static str>,
}

/// Round a carried smoothed angle for display; no reading yet shows 0
pub(crate) fn display_angle(smoothed: Option<f32>) -> i32 {
    smoothed.map(|a| a.round() as i32).unwrap_or(0)
}
