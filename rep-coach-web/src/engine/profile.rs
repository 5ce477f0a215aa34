//! Closed dispatch over the three exercise profiles

use crate::exercise::{ExerciseKind, ExerciseStatus, PullupProfile, PushupProfile, SquatProfile};
use crate::pose::LandmarkFrame;

/// The one live profile, carrying its own state
pub enum ActiveProfile {
    Squat(SquatProfile),
    Pushup(PushupProfile),
    Pullup(PullupProfile),
}

impl ActiveProfile {
    /// Fresh profile with no carried state
    pub fn new(kind: ExerciseKind) -> Self {
        match kind {
            ExerciseKind::Squat => ActiveProfile::Squat(SquatProfile::new()),
            ExerciseKind::Pushup => ActiveProfile::Pushup(PushupProfile::new()),
            ExerciseKind::Pullup => ActiveProfile::Pullup(PullupProfile::new()),
        }
    }

    pub fn kind(&self) -> ExerciseKind {
        match self {
            ActiveProfile::Squat(_) => ExerciseKind::Squat,
            ActiveProfile::Pushup(_) => ExerciseKind::Pushup,
            ActiveProfile::Pullup(_) => ExerciseKind::Pullup,
        }
    }

    pub fn process(&mut self, frame: &LandmarkFrame, now_ms: f64) -> ExerciseStatus {
        match self {
            ActiveProfile::Squat(p) => p.process(frame),
            ActiveProfile::Pushup(p) => p.process(frame, now_ms),
            ActiveProfile::Pullup(p) => p.process(frame, now_ms),
        }
    }

    pub fn status(&self) -> ExerciseStatus {
        match self {
            ActiveProfile::Squat(p) => p.status(),
            ActiveProfile::Pushup(p) => p.status(),
            ActiveProfile::Pullup(p) => p.status(),
        }
    }

    /// Current stage/count/angle with replacement feedback
    pub fn status_with(&self, feedback: String) -> ExerciseStatus {
        match self {
            ActiveProfile::Squat(p) => p.status_with(feedback),
            ActiveProfile::Pushup(p) => p.status_with(feedback),
            ActiveProfile::Pullup(p) => p.status_with(feedback),
        }
    }

    pub fn reps(&self) -> u32 {
        match self {
            ActiveProfile::Squat(p) => p.reps(),
            ActiveProfile::Pushup(p) => p.reps(),
            ActiveProfile::Pullup(p) => p.reps(),
        }
    }

    /// Break a calibration hold in progress; no-op for squats
    pub fn interrupt_calibration(&mut self) {
        match self {
            ActiveProfile::Squat(_) => {}
            ActiveProfile::Pushup(p) => p.interrupt_calibration(),
            ActiveProfile::Pullup(p) => p.interrupt_calibration(),
        }
    }

    /// Zero the count for a new set, keeping any learned calibration
    pub fn reset_set(&mut self) {
        match self {
            ActiveProfile::Squat(p) => p.reset_set(),
            ActiveProfile::Pushup(p) => p.reset_set(),
            ActiveProfile::Pullup(p) => p.reset_set(),
        }
    }
}
