//! Exercise engine - one active profile behind a global visibility gate
//!
//! Frame flow: length check → visibility gate → active profile → status.
//! Degraded input never errors; it becomes a status with feedback text.

use crate::exercise::{ExerciseKind, ExerciseStatus};
use crate::pose::{Landmark, LandmarkFrame};
use super::{ActiveProfile, SetLog, VisibilityGate};

const NOT_VISIBLE: &str = "Body not clearly visible. Step into the frame";

pub struct ExerciseEngine {
    profile: ActiveProfile,
    gate: VisibilityGate,
    /// Gate result of the previous frame, for transition logging
    body_visible: bool,
}

impl ExerciseEngine {
    pub fn new(kind: ExerciseKind) -> Self {
        Self {
            profile: ActiveProfile::new(kind),
            gate: VisibilityGate::new(),
            body_visible: true,
        }
    }

    pub fn exercise(&self) -> ExerciseKind {
        self.profile.kind()
    }

    pub fn reps(&self) -> u32 {
        self.profile.reps()
    }

    /// Swap in a fresh profile; nothing carries over, even when
    /// re-selecting the same exercise
    pub fn select_exercise(&mut self, kind: ExerciseKind) {
        self.profile = ActiveProfile::new(kind);
        self.body_visible = true;
        console_log!("exercise selected: {}", kind);
    }

    /// Explicit restart: same exercise, calibration included
    pub fn restart(&mut self) {
        self.select_exercise(self.profile.kind());
    }

    /// Close the current set and start the next one
    ///
    /// The count resets; a learned calibration is kept since the user
    /// has not changed.
    pub fn finish_set(&mut self, weight_kg: Option<f32>) -> SetLog {
        let log = SetLog::new(self.profile.kind(), self.profile.reps(), weight_kg);
        self.profile.reset_set();
        console_log!("set finished: {}", log.summary());
        log
    }

    /// Status of the active profile without processing a frame
    pub fn status(&self) -> ExerciseStatus {
        self.profile.status()
    }

    /// Process one frame of landmarks
    ///
    /// Returns None when fewer than 33 landmarks were supplied: the frame
    /// is skipped entirely and nothing should be rendered for it.
    pub fn update(&mut self, landmarks: &[Landmark], now_ms: f64) -> Option<ExerciseStatus> {
        let frame = LandmarkFrame::new(landmarks)?;

        let visible = self.gate.passes(&frame);
        if visible != self.body_visible {
            console_log!("body {}", if visible { "visible" } else { "lost" });
            self.body_visible = visible;
        }

        if !visible {
            // A hold only counts while the body is confidently tracked
            self.profile.interrupt_calibration();
            return Some(self.profile.status_with(NOT_VISIBLE.to_string()));
        }

        Some(self.profile.process(&frame, now_ms))
    }
}

impl Default for ExerciseEngine {
    fn default() -> Self {
        Self::new(ExerciseKind::Squat)
    }
}
