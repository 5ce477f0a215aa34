//! Landmark records and read-only frame access
//!
//! A frame is the 33-point MediaPipe Pose output for one video frame.
//! Profiles read points by anatomical index and never mutate the frame.

use nalgebra::Point2;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single 2D landmark with detector confidence
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,          // 0-1 normalized, left to right
    pub y: f32,          // 0-1 normalized, top to bottom
    pub visibility: f32, // 0-1 confidence
}

impl Landmark {
    pub fn new(x: f32, y: f32, visibility: f32) -> Self {
        Self { x, y, visibility }
    }

    /// Both coordinates are usable numbers
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Borrowed view over one frame of landmarks
#[derive(Clone, Copy)]
pub struct LandmarkFrame<'a> {
    landmarks: &'a [Landmark],
}

impl<'a> LandmarkFrame<'a> {
    /// Wrap a landmark slice. Returns None unless the full
    /// 33-point body is present.
    pub fn new(landmarks: &'a [Landmark]) -> Option<Self> {
        if landmarks.len() < LANDMARK_COUNT {
            return None;
        }
        Some(Self { landmarks })
    }

    /// Position of a landmark, or None if it is out of range or malformed
    pub fn point(&self, index: usize) -> Option<Point2<f32>> {
        self.landmarks
            .get(index)
            .filter(|lm| lm.is_well_formed())
            .map(|lm| Point2::new(lm.x, lm.y))
    }

    /// Visibility of a landmark; missing or NaN confidence counts as 0
    pub fn visibility(&self, index: usize) -> f32 {
        match self.landmarks.get(index) {
            Some(lm) if lm.visibility.is_finite() => lm.visibility,
            _ => 0.0,
        }
    }

    /// Summed visibility of a group of landmarks
    pub fn summed_visibility(&self, indices: &[usize]) -> f32 {
        indices.iter().map(|&i| self.visibility(i)).sum()
    }
}
