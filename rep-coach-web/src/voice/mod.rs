//! Voice module - debounced spoken coaching
//!
//! Re-exports only. All logic in submodules.

mod coach;
mod cue;

pub use coach::{SpeechOutput, VoiceCoach, DEBOUNCE_MS};
pub use cue::{next_cue, Cue};
