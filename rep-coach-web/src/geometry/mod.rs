//! Geometry module - joint angles, distances and signal smoothing
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod smoothing;

pub use angles::{calculate_angle, distance};
pub use smoothing::{smooth, SMOOTHING_ALPHA};
