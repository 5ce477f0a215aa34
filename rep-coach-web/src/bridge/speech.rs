//! Web Speech output for the voice coach
//!
//! Uses the browser's SpeechSynthesis. The coach is created on first use;
//! pages without speech support simply stay silent.

use wasm_bindgen::prelude::*;
use std::cell::{Cell, RefCell};
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};
use crate::exercise::ExerciseStatus;
use crate::voice::{next_cue, SpeechOutput, VoiceCoach};

/// Slightly brisk delivery so counts keep up with fast reps
const SPEECH_RATE: f32 = 1.1;

/// `window.speechSynthesis`, if the browser has it
pub struct WebSpeech {
    synth: Option<SpeechSynthesis>,
}

impl WebSpeech {
    pub fn new() -> Self {
        let synth = web_sys::window().and_then(|w| w.speech_synthesis().ok());
        if synth.is_none() {
            web_sys::console::warn_1(&"Speech synthesis unavailable, voice coach muted".into());
        }
        Self { synth }
    }
}

impl Default for WebSpeech {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechOutput for WebSpeech {
    fn is_speaking(&self) -> bool {
        self.synth.as_ref().map(|s| s.speaking()).unwrap_or(false)
    }

    fn cancel(&mut self) {
        if let Some(synth) = &self.synth {
            synth.cancel();
        }
    }

    fn say(&mut self, text: &str) {
        let Some(synth) = &self.synth else {
            return;
        };
        match SpeechSynthesisUtterance::new_with_text(text) {
            Ok(utterance) => {
                utterance.set_rate(SPEECH_RATE);
                synth.speak(&utterance);
            }
            Err(_) => {
                web_sys::console::warn_1(&format!("Could not create utterance for '{}'", text).into());
            }
        }
    }
}

thread_local! {
    static VOICE: RefCell<Option<VoiceCoach<WebSpeech>>> = RefCell::new(None);
    static VOICE_ENABLED: Cell<bool> = Cell::new(false);
}

fn with_voice<R>(f: impl FnOnce(&mut VoiceCoach<WebSpeech>) -> R) -> R {
    VOICE.with(|voice_cell| {
        let mut voice = voice_cell.borrow_mut();
        let coach = voice.get_or_insert_with(|| VoiceCoach::new(WebSpeech::new()));
        f(coach)
    })
}

/// Speak the cue for this frame, if voice coaching is on
pub fn coach_frame(previous_reps: u32, status: &ExerciseStatus, now_ms: f64) {
    if !VOICE_ENABLED.with(Cell::get) {
        return;
    }
    if let Some(cue) = next_cue(previous_reps, status) {
        with_voice(|coach| coach.speak(&cue.text, cue.is_count, now_ms));
    }
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Turn automatic per-frame cues on or off
#[wasm_bindgen]
pub fn set_voice_enabled(enabled: bool) {
    VOICE_ENABLED.with(|flag| flag.set(enabled));
    if !enabled {
        VOICE.with(|voice_cell| {
            if let Some(coach) = voice_cell.borrow_mut().as_mut() {
                coach.output_mut().cancel();
            }
        });
    }
}

/// Speak a line directly. Counts interrupt; feedback is debounced.
/// Returns whether anything was spoken.
#[wasm_bindgen]
pub fn speak(text: &str, is_count: bool) -> bool {
    let now = super::session::now_ms();
    with_voice(|coach| coach.speak(text, is_count, now))
}
