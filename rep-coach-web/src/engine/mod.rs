//! Engine module - active profile, visibility gate and set lifecycle
//!
//! Re-exports only. All logic in submodules.

mod gate;
mod profile;
mod set_log;
mod exercise_engine;

pub use gate::{VisibilityGate, VISIBILITY_THRESHOLD};
pub use profile::ActiveProfile;
pub use set_log::SetLog;
pub use exercise_engine::ExerciseEngine;
