//! Landmark intake from JavaScript
//!
//! Receives the MediaPipe Pose landmarks every frame as a flat array and
//! runs them through the engine. The HUD payload goes straight back.

use wasm_bindgen::prelude::*;
use crate::pose::{Landmark, LANDMARK_COUNT};
use super::session::{now_ms, with_engine, FrameStatus};
use super::speech;

/// Values per landmark: x, y, visibility
pub const LANDMARK_STRIDE: usize = 3;

/// Unpack a flat [x, y, visibility, ...] array. A trailing partial
/// record is dropped.
pub fn parse_landmarks(data: &[f32]) -> Vec<Landmark> {
    data.chunks_exact(LANDMARK_STRIDE)
        .map(|c| Landmark::new(c[0], c[1], c[2]))
        .collect()
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 99 values
/// (33 landmarks × 3 values: x, y, visibility)
///
/// Returns undefined when the frame holds fewer than 33 landmarks.
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) -> Option<FrameStatus> {
    if data.len() % LANDMARK_STRIDE != 0 {
        web_sys::console::warn_1(
            &format!("Landmark data length {} is not a multiple of {}", data.len(), LANDMARK_STRIDE).into()
        );
    }

    let landmarks = parse_landmarks(data);
    if landmarks.len() < LANDMARK_COUNT {
        return None;
    }

    let now = now_ms();
    let (previous_reps, status) = with_engine(|engine| {
        let previous_reps = engine.reps();
        (previous_reps, engine.update(&landmarks, now))
    });
    let status = status?;

    speech::coach_frame(previous_reps, &status, now);

    Some(FrameStatus::from(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_frame() {
        let data: Vec<f32> = (0..99).map(|i| i as f32).collect();
        let landmarks = parse_landmarks(&data);
        assert_eq!(landmarks.len(), 33);
        assert_eq!(landmarks[1], Landmark::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_parse_drops_partial_record() {
        let data = vec![0.5; 3 * 20 + 2];
        assert_eq!(parse_landmarks(&data).len(), 20);
    }
}
