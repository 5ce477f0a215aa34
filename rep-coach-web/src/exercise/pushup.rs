//! Push-up profile - elbow angle plus learned reach
//!
//! The user first holds a high plank for the calibration window so the
//! shoulder-wrist reach can be learned. After that the bottom of a rep is
//! "reach below 45% of the learned max", which adapts to arm length and
//! camera distance. Back straightness is critiqued separately and never
//! changes the rep count.

use crate::geometry::{calculate_angle, distance, smooth};
use crate::pose::{BodySide, Joint, LandmarkFrame};
use super::status::display_angle;
use super::{CalibrationProgress, ExerciseStatus, RangeCalibration, Stage};

/// Smoothed elbow angle above this is a locked-out arm
const EXTENDED_ANGLE: f32 = 160.0;

/// Reach below this fraction of the learned max is the bottom of a rep
const CONTRACTED_RATIO: f32 = 0.45;

/// Vertical shoulder-ankle spread above this is an upright body (squat)
const MAX_VERTICAL_SPREAD: f32 = 0.50;

/// Shoulder-hip-ankle angle below this is a sagging or piked back
const MIN_BACK_ANGLE: f32 = 150.0;

const ARM: [Joint; 3] = [Joint::Shoulder, Joint::Elbow, Joint::Wrist];

mod feedback {
    pub const CALIBRATE: &str = "Hold a high plank with straight arms to calibrate";
    pub const CALIBRATED: &str = "Calibrated! Start your push-ups";
    pub const DESCENDING: &str = "Lower your chest";
    pub const GOOD_DEPTH: &str = "Good depth! Push up";
    pub const ASCENDING: &str = "Push!";
    pub const NO_DEPTH: &str = "Go lower! Chest toward the floor";
    pub const NOT_PLANK: &str = "Get into a plank position";
    pub const BACK: &str = "Keep your back straight!";
}

const INSTRUCTION: &str = "Place the camera at floor level, side-on, full body in frame";
const LABEL: &str = "Elbow angle";

pub struct PushupProfile {
    reps: u32,
    stage: Stage,
    smoothed_angle: Option<f32>,
    feedback: String,
    calibration: RangeCalibration,
}

impl PushupProfile {
    pub fn new() -> Self {
        Self {
            reps: 0,
            stage: Stage::Calibrating,
            smoothed_angle: None,
            feedback: feedback::CALIBRATE.to_string(),
            calibration: RangeCalibration::new(),
        }
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn max_range(&self) -> Option<f32> {
        self.calibration.max_range()
    }

    /// Start a new set, keeping the learned reach if there is one
    pub fn reset_set(&mut self) {
        let calibration = std::mem::take(&mut self.calibration);
        *self = Self::new();
        if calibration.is_calibrated() {
            self.calibration = calibration;
            self.stage = Stage::Up;
            self.feedback = feedback::CALIBRATED.to_string();
        }
    }

    /// Break an in-progress calibration hold (e.g. body left the frame)
    pub fn interrupt_calibration(&mut self) {
        if self.stage == Stage::Calibrating {
            self.calibration.interrupt();
        }
    }

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

    pub fn process(&mut self, frame: &LandmarkFrame, now_ms: f64) -> ExerciseStatus {
        let side = BodySide::select(frame, &ARM);
        let shoulder = frame.joint(side, Joint::Shoulder);
        let elbow = frame.joint(side, Joint::Elbow);
        let wrist = frame.joint(side, Joint::Wrist);

        let raw_angle = calculate_angle(shoulder, elbow, wrist);
        let (shoulder, wrist) = match (shoulder, wrist) {
            (Some(shoulder), Some(wrist)) if raw_angle > 0.0 => (shoulder, wrist),
            _ => {
                // An unwatched stretch breaks the hold
                self.interrupt_calibration();
                return self.status();
            }
        };

        let angle = smooth(raw_angle, self.smoothed_angle);
        self.smoothed_angle = Some(angle);

        let ankle = frame.joint(side, Joint::Ankle);
        if let Some(ankle) = ankle {
            if (shoulder.y - ankle.y).abs() > MAX_VERTICAL_SPREAD {
                self.interrupt_calibration();
                return self.status_with(feedback::NOT_PLANK.to_string());
            }
        }

        let reach = distance(shoulder, wrist);

        if self.stage == Stage::Calibrating {
            self.calibrate(angle, reach, now_ms);
            return self.status();
        }

        let Some(max_range) = self.calibration.max_range() else {
            return self.status();
        };
        let contracted = reach < CONTRACTED_RATIO * max_range;
        let mut counted = false;

        if angle > EXTENDED_ANGLE {
            match self.stage {
                Stage::Ascending => {
                    self.reps += 1;
                    self.feedback = self.reps.to_string();
                    counted = true;
                    console_log!("push-up rep {}", self.reps);
                }
                Stage::Descending => {
                    self.feedback = feedback::NO_DEPTH.to_string();
                }
                _ => {}
            }
            self.stage = Stage::Up;
        } else if contracted {
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

        // Form critique only; the count stays on screen on the rep frame
        let back_angle = calculate_angle(Some(shoulder), frame.joint(side, Joint::Hip), ankle);
        if !counted && back_angle > 0.0 && back_angle < MIN_BACK_ANGLE {
            return self.status_with(feedback::BACK.to_string());
        }

        self.status()
    }

    fn calibrate(&mut self, angle: f32, reach: f32, now_ms: f64) {
        if angle <= EXTENDED_ANGLE {
            self.calibration.interrupt();
            self.feedback = feedback::CALIBRATE.to_string();
            return;
        }

        match self.calibration.sample(reach, now_ms) {
            CalibrationProgress::Complete(max_range) => {
                self.stage = Stage::Up;
                self.feedback = feedback::CALIBRATED.to_string();
                console_log!("push-up calibrated, max range {:.3}", max_range);
            }
            progress => {
                self.feedback = format!("Hold still... {}", progress.seconds_left());
            }
        }
    }
}

impl Default for PushupProfile {
    fn default() -> Self {
        Self::new()
    }
}
