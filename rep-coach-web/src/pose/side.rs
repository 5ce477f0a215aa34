//! Per-frame left/right side selection
//!
//! Side-on camera views occlude the far limb. Each frame the side whose
//! relevant joints the detector is more confident about is used. There is
//! no lock across frames.

use super::landmark::*;

/// Anatomical joints read by the exercise profiles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Joint {
    Shoulder,
    Elbow,
    Wrist,
    Hip,
    Knee,
    Ankle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodySide {
    Left,
    Right,
}

impl BodySide {
    /// Landmark index of a joint on this side
    pub fn index(&self, joint: Joint) -> usize {
        match (self, joint) {
            (BodySide::Left, Joint::Shoulder) => LEFT_SHOULDER,
            (BodySide::Left, Joint::Elbow) => LEFT_ELBOW,
            (BodySide::Left, Joint::Wrist) => LEFT_WRIST,
            (BodySide::Left, Joint::Hip) => LEFT_HIP,
            (BodySide::Left, Joint::Knee) => LEFT_KNEE,
            (BodySide::Left, Joint::Ankle) => LEFT_ANKLE,
            (BodySide::Right, Joint::Shoulder) => RIGHT_SHOULDER,
            (BodySide::Right, Joint::Elbow) => RIGHT_ELBOW,
            (BodySide::Right, Joint::Wrist) => RIGHT_WRIST,
            (BodySide::Right, Joint::Hip) => RIGHT_HIP,
            (BodySide::Right, Joint::Knee) => RIGHT_KNEE,
            (BodySide::Right, Joint::Ankle) => RIGHT_ANKLE,
        }
    }

    /// Pick the side with the higher summed visibility over `joints`.
    /// Ties go to the left side.
    pub fn select(frame: &LandmarkFrame, joints: &[Joint; 3]) -> BodySide {
        let score = |side: BodySide| -> f32 {
            frame.summed_visibility(&joints.map(|j| side.index(j)))
        };

        if score(BodySide::Left) >= score(BodySide::Right) {
            BodySide::Left
        } else {
            BodySide::Right
        }
    }
}

impl<'a> LandmarkFrame<'a> {
    /// Position of a joint on the given side
    pub fn joint(&self, side: BodySide, joint: Joint) -> Option<nalgebra::Point2<f32>> {
        self.point(side.index(joint))
    }
}
