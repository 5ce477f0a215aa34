//! Rep Coach Web - real-time rep counting from pose landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Console logging
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub(crate) fn log(s: &str);
}

// Native builds (unit tests) have no console to import
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn log(s: &str) {
    eprintln!("{}", s);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

mod error;
pub mod geometry;
pub mod pose;
pub mod exercise;
pub mod engine;
pub mod voice;
mod bridge;

#[cfg(test)]
mod fixtures;

pub use error::ExerciseError;
pub use pose::Landmark;
pub use exercise::{ExerciseKind, ExerciseStatus, Stage};
pub use engine::{ExerciseEngine, SetLog};
pub use voice::{SpeechOutput, VoiceCoach};

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    update_landmarks,
    select_exercise,
    restart_set,
    finish_set,
    get_status,
    current_exercise,
    speak,
    set_voice_enabled,
    parse_landmarks,
    FrameStatus,
    FinishedSet,
    WebSpeech,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("Rep coach ready");
}
