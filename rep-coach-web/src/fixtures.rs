//! Synthetic landmark frames for unit tests
//!
//! Limb geometry is built from a target joint angle so tests can drive the
//! state machines with known readings. Segment lengths are fixed, so the
//! shoulder-wrist reach follows the elbow angle (law of cosines).

use crate::pose::*;

/// Upper arm / forearm / thigh / shin length in normalized units
pub const SEGMENT: f32 = 0.15;
pub const FRAME_MS: f64 = 33.0;

pub struct FrameBuilder {
    landmarks: Vec<Landmark>,
}

impl FrameBuilder {
    /// All 33 points at frame center, clearly visible
    pub fn new() -> Self {
        Self {
            landmarks: vec![Landmark::new(0.5, 0.5, 0.9); LANDMARK_COUNT],
        }
    }

    /// Place a landmark on both sides of the body
    pub fn both(mut self, left: usize, right: usize, x: f32, y: f32) -> Self {
        self.landmarks[left].x = x;
        self.landmarks[left].y = y;
        self.landmarks[right].x = x;
        self.landmarks[right].y = y;
        self
    }

    pub fn point(mut self, index: usize, x: f32, y: f32) -> Self {
        self.landmarks[index].x = x;
        self.landmarks[index].y = y;
        self
    }

    pub fn visibility(mut self, index: usize, visibility: f32) -> Self {
        self.landmarks[index].visibility = visibility;
        self
    }

    pub fn build(self) -> Vec<Landmark> {
        self.landmarks
    }
}

/// Side-on standing squat with the knee at `knee_angle` degrees
///
/// Shin points straight down; the thigh is rotated from it by the knee
/// angle, so the hip drops to knee height at 90°.
pub fn squat_frame(knee_angle: f32, shoulder_x: f32) -> Vec<Landmark> {
    let knee = (0.5, 0.6);
    let ankle = (0.5, 0.6 + 2.0 * SEGMENT);
    let theta = knee_angle.to_radians();
    let hip = (knee.0 + 2.0 * SEGMENT * theta.sin(), knee.1 + 2.0 * SEGMENT * theta.cos());

    FrameBuilder::new()
        .both(LEFT_SHOULDER, RIGHT_SHOULDER, shoulder_x, hip.1 - 0.25)
        .both(LEFT_HIP, RIGHT_HIP, hip.0, hip.1)
        .both(LEFT_KNEE, RIGHT_KNEE, knee.0, knee.1)
        .both(LEFT_ANKLE, RIGHT_ANKLE, ankle.0, ankle.1)
        .point(NOSE, shoulder_x, hip.1 - 0.35)
        .build()
}

/// Side-on plank with the elbow at `elbow_angle` degrees
///
/// Elbow sits under the shoulder; the forearm swings from the upper arm
/// by the elbow angle. `hip_y` lets tests sag the hips.
pub fn pushup_frame(elbow_angle: f32, hip_y: f32) -> Vec<Landmark> {
    let shoulder = (0.3, 0.5);
    let elbow = (shoulder.0, shoulder.1 + SEGMENT);
    let theta = elbow_angle.to_radians();
    let wrist = (elbow.0 + SEGMENT * theta.sin(), elbow.1 - SEGMENT * theta.cos());

    FrameBuilder::new()
        .both(LEFT_SHOULDER, RIGHT_SHOULDER, shoulder.0, shoulder.1)
        .both(LEFT_ELBOW, RIGHT_ELBOW, elbow.0, elbow.1)
        .both(LEFT_WRIST, RIGHT_WRIST, wrist.0, wrist.1)
        .both(LEFT_HIP, RIGHT_HIP, 0.55, hip_y)
        .both(LEFT_ANKLE, RIGHT_ANKLE, 0.85, 0.55)
        .point(NOSE, 0.22, 0.48)
        .build()
}

/// Upright standing pose with arms at the sides (not a plank)
pub fn standing_arms_frame(elbow_angle: f32) -> Vec<Landmark> {
    let shoulder = (0.5, 0.3);
    let elbow = (shoulder.0, shoulder.1 + SEGMENT);
    let theta = elbow_angle.to_radians();
    let wrist = (elbow.0 + SEGMENT * theta.sin(), elbow.1 - SEGMENT * theta.cos());

    FrameBuilder::new()
        .both(LEFT_SHOULDER, RIGHT_SHOULDER, shoulder.0, shoulder.1)
        .both(LEFT_ELBOW, RIGHT_ELBOW, elbow.0, elbow.1)
        .both(LEFT_WRIST, RIGHT_WRIST, wrist.0, wrist.1)
        .both(LEFT_HIP, RIGHT_HIP, 0.5, 0.6)
        .both(LEFT_ANKLE, RIGHT_ANKLE, 0.5, 0.95)
        .point(NOSE, 0.5, 0.2)
        .build()
}

/// Hanging from a bar with the elbow at `elbow_angle` degrees
///
/// Elbow sits above the shoulder; wrists end up above the shoulder line
/// except near full contraction.
pub fn pullup_frame(elbow_angle: f32) -> Vec<Landmark> {
    let shoulder = (0.5, 0.4);
    let elbow = (shoulder.0, shoulder.1 - SEGMENT);
    let theta = elbow_angle.to_radians();
    let wrist = (elbow.0 + SEGMENT * theta.sin(), elbow.1 + SEGMENT * theta.cos());

    FrameBuilder::new()
        .both(LEFT_SHOULDER, RIGHT_SHOULDER, shoulder.0, shoulder.1)
        .both(LEFT_ELBOW, RIGHT_ELBOW, elbow.0, elbow.1)
        .both(LEFT_WRIST, RIGHT_WRIST, wrist.0, wrist.1)
        .both(LEFT_HIP, RIGHT_HIP, 0.5, 0.7)
        .both(LEFT_ANKLE, RIGHT_ANKLE, 0.5, 0.95)
        .point(NOSE, 0.5, 0.32)
        .build()
}

/// Same frame with both wrists malformed (NaN x), as if the tracker lost the hands
pub fn without_wrists(mut landmarks: Vec<Landmark>) -> Vec<Landmark> {
    landmarks[LEFT_WRIST].x = f32::NAN;
    landmarks[RIGHT_WRIST].x = f32::NAN;
    landmarks
}

/// Feed the same frame repeatedly, advancing the clock each time
pub fn hold<F>(frames: usize, now_ms: &mut f64, mut step: F)
where
    F: FnMut(f64),
{
    for _ in 0..frames {
        step(*now_ms);
        *now_ms += FRAME_MS;
    }
}
