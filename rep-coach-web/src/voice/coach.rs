//! Voice coach - speaks feedback without nagging or talking over itself
//!
//! Rules:
//! - Repeated feedback is muted for the debounce window
//! - Feedback never interrupts an utterance in progress
//! - Rep counts always interrupt, they are time-critical
//!
//! Playback is fire-and-forget, so bookkeeping is updated when speech is
//! requested, not when it finishes.

/// Minimum gap before the same feedback line is spoken again
pub const DEBOUNCE_MS: f64 = 3000.0;

/// Speech backend (Web Speech API in the browser, a recorder in tests)
pub trait SpeechOutput {
    /// An utterance is currently playing
    fn is_speaking(&self) -> bool;
    /// Stop the current utterance and drop anything queued
    fn cancel(&mut self);
    /// Start speaking `text` without waiting for it to finish
    fn say(&mut self, text: &str);
}

pub struct VoiceCoach<S: SpeechOutput> {
    output: S,
    last_text: Option<String>,
    last_spoken_ms: Option<f64>,
    debounce_ms: f64,
}

impl<S: SpeechOutput> VoiceCoach<S> {
    pub fn new(output: S) -> Self {
        Self {
            output,
            last_text: None,
            last_spoken_ms: None,
            debounce_ms: DEBOUNCE_MS,
        }
    }

    /// Override the re-utterance window
    pub fn with_debounce(mut self, debounce_ms: f64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn output(&self) -> &S {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut S {
        &mut self.output
    }

    /// Speak `text` unless a rule suppresses it. Returns true if spoken.
    pub fn speak(&mut self, text: &str, is_count: bool, now_ms: f64) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        if !is_count && self.is_repeat(text, now_ms) {
            return false;
        }

        if self.output.is_speaking() {
            if !is_count {
                return false;
            }
            self.output.cancel();
        }

        self.output.say(text);

        if !is_count {
            self.last_text = Some(text.to_string());
            self.last_spoken_ms = Some(now_ms);
        }
        true
    }

    fn is_repeat(&self, text: &str, now_ms: f64) -> bool {
        match (&self.last_text, self.last_spoken_ms) {
            (Some(last), Some(at)) => last == text && now_ms - at < self.debounce_ms,
            _ => false,
        }
    }
}
