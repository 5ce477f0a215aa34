//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod session;
mod speech;

pub use landmarks::{update_landmarks, parse_landmarks, LANDMARK_STRIDE};

pub use session::{
    select_exercise,
    restart_set,
    finish_set,
    get_status,
    current_exercise,
    FrameStatus,
    FinishedSet,
};

pub use speech::{speak, set_voice_enabled, WebSpeech};
