//! Exercise module - per-exercise rep state machines
//!
//! Each profile owns its smoothed angle, stage, rep counter and feedback.
//! Re-exports only. All logic in submodules.

mod kind;
mod stage;
mod status;
mod calibration;
mod squat;
mod pushup;
mod pullup;

pub use kind::ExerciseKind;
pub use stage::Stage;
pub use status::ExerciseStatus;
pub use calibration::{RangeCalibration, CalibrationProgress, CALIBRATION_HOLD_MS};
pub use squat::SquatProfile;
pub use pushup::PushupProfile;
pub use pullup::PullupProfile;
