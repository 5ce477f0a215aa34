//! Errors surfaced across the JS boundary

use wasm_bindgen::JsValue;

/// Errors from the exercise selection API
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExerciseError {
    UnknownExercise(String),
}

impl std::fmt::Display for ExerciseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExerciseError::UnknownExercise(name) => write!(
                f,
                "Unknown exercise '{}' (expected squat, pushup or pullup)",
                name
            ),
        }
    }
}

impl std::error::Error for ExerciseError {}

impl From<ExerciseError> for JsValue {
    fn from(err: ExerciseError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
