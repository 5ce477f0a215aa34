//! Visibility gate - rejects hallucinated skeletons
//!
//! The pose estimator can fit a low-confidence skeleton onto furniture or
//! a tripod. A frame only reaches the exercise profile if the face or both
//! shoulders are confidently detected.

use crate::pose::{LandmarkFrame, LEFT_SHOULDER, NOSE, RIGHT_SHOULDER};

/// Confidence a gate landmark must exceed
pub const VISIBILITY_THRESHOLD: f32 = 0.65;

#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityGate;

impl VisibilityGate {
    pub fn new() -> Self {
        Self
    }

    /// Face visible, or both shoulders visible
    pub fn passes(&self, frame: &LandmarkFrame) -> bool {
        let face = frame.visibility(NOSE) > VISIBILITY_THRESHOLD;
        let shoulders = frame.visibility(LEFT_SHOULDER) > VISIBILITY_THRESHOLD
            && frame.visibility(RIGHT_SHOULDER) > VISIBILITY_THRESHOLD;
        face || shoulders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FrameBuilder;

    fn check(nose: f32, left: f32, right: f32) -> bool {
        let landmarks = FrameBuilder::new()
            .visibility(NOSE, nose)
            .visibility(LEFT_SHOULDER, left)
            .visibility(RIGHT_SHOULDER, right)
            .build();
        let frame = LandmarkFrame::new(&landmarks).unwrap();
        VisibilityGate::new().passes(&frame)
    }

    #[test]
    fn test_face_alone_passes() {
        assert!(check(0.9, 0.1, 0.1));
    }

    #[test]
    fn test_both_shoulders_pass() {
        assert!(check(0.1, 0.8, 0.8));
    }

    #[test]
    fn test_one_shoulder_is_not_enough() {
        assert!(!check(0.1, 0.9, 0.3));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!check(0.65, 0.65, 0.65));
    }
}
