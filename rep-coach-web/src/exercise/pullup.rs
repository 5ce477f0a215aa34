//! Pull-up profile - elbow angle plus learned reach while hanging
//!
//! Calibration is a 3s dead hang. A rep is complete when the user pulls
//! the shoulders up to within 25% of the learned reach of the hands and
//! then returns to a full hang.

use crate::geometry::{calculate_angle, distance, smooth};
use crate::pose::{BodySide, Joint, LandmarkFrame};
use super::status::display_angle;
use super::{CalibrationProgress, ExerciseStatus, RangeCalibration, Stage};

/// Smoothed elbow angle above this is a dead hang
const EXTENDED_ANGLE: f32 = 150.0;

/// Reach below this fraction of the learned max is the top of a rep
const CONTRACTED_RATIO: f32 = 0.25;

/// Wrist more than this far below the shoulder means hands are off the bar
const MAX_WRIST_DROP: f32 = 0.10;

const ARM: [Joint; 3] = [Joint::Shoulder, Joint::Elbow, Joint::Wrist];

mod feedback {
    pub const CALIBRATE: &str = "Hang from the bar with straight arms to calibrate";
    pub const CALIBRATED: &str = "Calibrated! Start pulling";
    pub const PULLING: &str = "Pull! Chin over the bar";
    pub const TOP: &str = "Great height! Lower with control";
    pub const LOWERING: &str = "All the way down";
    pub const NO_HEIGHT: &str = "Pull higher! Chin over the bar";
    pub const NOT_HANGING: &str = "Grab the bar, hands above your shoulders";
}

const INSTRUCTION: &str = "Place the camera facing you, bar and full body in frame";
const LABEL: &str = "Elbow angle";

pub struct PullupProfile {
    reps: u32,
    stage: Stage,
    smoothed_angle: Option<f32>,
    feedback: String,
    calibration: RangeCalibration,
}

impl PullupProfile {
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
            self.stage = Stage::Hang;
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

        // y grows downward
        if wrist.y - shoulder.y > MAX_WRIST_DROP {
            self.interrupt_calibration();
            return self.status_with(feedback::NOT_HANGING.to_string());
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

        if angle > EXTENDED_ANGLE {
            match self.stage {
                Stage::Lowering => {
                    self.reps += 1;
                    self.feedback = self.reps.to_string();
                    console_log!("pull-up rep {}", self.reps);
                }
                Stage::Pulling => {
                    self.feedback = feedback::NO_HEIGHT.to_string();
                }
                _ => {}
            }
            self.stage = Stage::Hang;
        } else if contracted {
            if self.stage == Stage::Pulling {
                self.stage = Stage::Top;
                self.feedback = feedback::TOP.to_string();
            }
        } else {
            match self.stage {
                Stage::Hang => {
                    self.stage = Stage::Pulling;
                    self.feedback = feedback::PULLING.to_string();
                }
                Stage::Top => {
                    self.stage = Stage::Lowering;
                    self.feedback = feedback::LOWERING.to_string();
                }
                _ => {}
            }
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
                self.stage = Stage::Hang;
                self.feedback = feedback::CALIBRATED.to_string();
                console_log!("pull-up calibrated, max range {:.3}", max_range);
            }
            progress => {
                self.feedback = format!("Hold still... {}", progress.seconds_left());
            }
        }
    }
}

impl Default for PullupProfile {
    fn default() -> Self {
        Self::new()
    }
}
