//! Pose module - landmark records, index table and frame access
//!
//! Re-exports only. All logic in submodules.

mod landmark;
mod side;

pub use landmark::{
    Landmark, LandmarkFrame, LANDMARK_COUNT,
    NOSE, LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
};
pub use side::{BodySide, Joint};
