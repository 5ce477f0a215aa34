//! Squat profile - knee angle state machine with relative depth check
//!
//! Depth is judged by hip height against knee height rather than a fixed
//! knee angle: camera height and limb proportions shift the angle a lot,
//! but "hip at or below knee" holds for any side-on view.

use crate::geometry::{calculate_angle, smooth};
use crate::pose::{BodySide, Joint, LandmarkFrame};
use super::status::display_angle;
use super::{ExerciseStatus, Stage};

/// Smoothed knee angle above this is a locked-out stand
const EXTENDED_ANGLE: f32 = 160.0;

/// Horizontal shoulder-ankle spread above this is a stretched-out body
/// (push-up / plank), not a squat
const MAX_HORIZONTAL_SPREAD: f32 = 0.35;

const LEG: [Joint; 3] = [Joint::Hip, Joint::Knee, Joint::Ankle];

mod feedback {
    pub const START: &str = "Stand side-on to the camera and squat";
    pub const DESCENDING: &str = "Lower your hips";
    pub const GOOD_DEPTH: &str = "Good depth! Now drive up";
    pub const ASCENDING: &str = "Drive up!";
    pub const NO_DEPTH: &str = "Didn't hit depth! Go lower";
    pub const NOT_UPRIGHT: &str = "Stand upright, this looks like a plank";
}

const INSTRUCTION: &str = "Place the camera at hip height, side-on, full body in frame";
const LABEL: &str = "Knee angle";

pub struct SquatProfile {
    reps: u32,
    stage: Stage,
    smoothed_angle: Option<f32>,
    feedback: String,
}

impl SquatProfile {
    pub fn new() -> Self {
        Self {
            reps: 0,
            stage: Stage::Up,
            smoothed_angle: None,
            feedback: feedback::START.to_string(),
        }
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Start a new set: count and stage reset, nothing else to keep
    pub fn reset_set(&mut self) {
        *self = Self::new();
    }

    /// Current state without processing a frame
    pub fn status(&self) -> ExerciseStatus {
        self.status_with(self.feedback.clone())
    }

    pub fn status_with(&self, feedback: String) -> ExerciseStatus {
        ExerciseStatus {
            stage: self.stage,
            reps: self.reps,
            feedback,
            angle: display_angle(self.smoothed_angle),
            instruction: Some(INSTRUCTION),
            label: Some(LABEL),
        }
    }

    /// Advance the state machine by one frame
    pub fn process(&mut self, frame: &LandmarkFrame) -> ExerciseStatus {
        let side = BodySide::select(frame, &LEG);
        let hip = frame.joint(side, Joint::Hip);
        let knee = frame.joint(side, Joint::Knee);
        let ankle = frame.joint(side, Joint::Ankle);

        let raw_angle = calculate_angle(hip, knee, ankle);
        let (Some(hip), Some(knee)) = (hip, knee) else {
            return self.status();
        };
        if raw_angle <= 0.0 {
            return self.status();
        }

        let angle = smooth(raw_angle, self.smoothed_angle);
        self.smoothed_angle = Some(angle);

        if let (Some(shoulder), Some(ankle)) = (frame.joint(side, Joint::Shoulder), ankle) {
            if (shoulder.x - ankle.x).abs() > MAX_HORIZONTAL_SPREAD {
                return self.status_with(feedback::NOT_UPRIGHT.to_string());
            }
        }

        // y grows downward: hip at or below the knee means hip.y >= knee.y
        let hip_at_depth = hip.y >= knee.y;

        if angle > EXTENDED_ANGLE {
            match self.stage {
                Stage::Ascending => {
                    self.reps += 1;
                    self.feedback = self.reps.to_string();
                    console_log!("squat rep {}", self.reps);
                }
                Stage::Descending => {
                    self.feedback = feedback::NO_DEPTH.to_string();
                }
                _ => {}
            }
            self.stage = Stage::Up;
        } else if hip_at_depth {
            if self.stage == Stage::Descending {
                self.stage = Stage::Down;
                self.feedback = feedback::GOOD_DEPTH.to_string();
            }
        } else {
            match self.stage {
                Stage::Up => {
                    self.stage = Stage::Descending;
                    self.feedback = feedback::DESCENDING.to_string();
                }
                Stage::Down => {
                    self.stage = Stage::Ascending;
                    self.feedback = feedback::ASCENDING.to_string();
                }
                _ => {}
            }
        }

        self.status()
    }
}

impl Default for SquatProfile {
    fn default() -> Self {
        Self::new()
    }
}
