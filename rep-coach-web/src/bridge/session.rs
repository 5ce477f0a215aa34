//! Exercise session storage and JS entry points
//!
//! One engine per page. Selecting, restarting and finishing sets all go
//! through here.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::engine::{ExerciseEngine, SetLog};
use crate::exercise::{ExerciseKind, ExerciseStatus};

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static ENGINE: RefCell<ExerciseEngine> = RefCell::new(ExerciseEngine::default());
}

/// Run `f` against the page's engine
pub fn with_engine<R>(f: impl FnOnce(&mut ExerciseEngine) -> R) -> R {
    ENGINE.with(|engine_cell| f(&mut engine_cell.borrow_mut()))
}

/// Monotonic page clock in ms (`performance.now()`), falling back to
/// wall-clock time where the Performance API is missing
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

// ============================================================================
// JS-FACING DATA
// ============================================================================

/// Per-frame HUD payload
#[wasm_bindgen(getter_with_clone)]
#[derive(Clone, Debug)]
pub struct FrameStatus {
    pub state: String,
    pub reps: u32,
    pub feedback: String,
    pub angle: i32,
    pub instruction: Option<String>,
    pub label: Option<String>,
}

impl From<ExerciseStatus> for FrameStatus {
    fn from(status: ExerciseStatus) -> Self {
        Self {
            state: status.stage.name().to_string(),
            reps: status.reps,
            feedback: status.feedback,
            angle: status.angle,
            instruction: status.instruction.map(str::to_string),
            label: status.label.map(str::to_string),
        }
    }
}

/// Finished set, ready for the caller to submit to its logging API
#[wasm_bindgen(getter_with_clone)]
#[derive(Clone, Debug)]
pub struct FinishedSet {
    pub exercise: String,
    pub reps: u32,
    pub weight_kg: Option<f32>,
    pub summary: String,
}

impl From<SetLog> for FinishedSet {
    fn from(log: SetLog) -> Self {
        Self {
            exercise: log.exercise.as_str().to_string(),
            reps: log.reps,
            weight_kg: log.weight_kg,
            summary: log.summary(),
        }
    }
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Switch exercise ("squat", "pushup", "pullup"); always starts fresh
#[wasm_bindgen]
pub fn select_exercise(name: &str) -> Result<(), JsValue> {
    let kind: ExerciseKind = name.parse()?;
    with_engine(|engine| engine.select_exercise(kind));
    Ok(())
}

/// Restart the current exercise from scratch, calibration included
#[wasm_bindgen]
pub fn restart_set() {
    with_engine(|engine| engine.restart());
}

/// End the current set; the count resets for the next one
#[wasm_bindgen]
pub fn finish_set(weight_kg: Option<f32>) -> FinishedSet {
    with_engine(|engine| engine.finish_set(weight_kg)).into()
}

/// Current status without a new frame (e.g. right after selecting)
#[wasm_bindgen]
pub fn get_status() -> FrameStatus {
    with_engine(|engine| engine.status()).into()
}

/// Name of the active exercise
#[wasm_bindgen]
pub fn current_exercise() -> String {
    with_engine(|engine| engine.exercise().as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::Stage;

    #[test]
    fn test_frame_status_conversion() {
        let status = ExerciseStatus {
            stage: Stage::Descending,
            reps: 4,
            feedback: "Lower your hips".to_string(),
            angle: 131,
            instruction: Some("side-on"),
            label: None,
        };
        let js = FrameStatus::from(status);
        assert_eq!(js.state, "DESCENDING");
        assert_eq!(js.reps, 4);
        assert_eq!(js.angle, 131);
        assert_eq!(js.instruction.as_deref(), Some("side-on"));
        assert!(js.label.is_none());
    }

    #[test]
    fn test_finished_set_conversion() {
        let set = FinishedSet::from(SetLog::new(ExerciseKind::Pushup, 12, None));
        assert_eq!(set.exercise, "pushup");
        assert_eq!(set.summary, "Push-up: 12 reps");
    }
}
