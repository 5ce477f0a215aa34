//! Closed set of supported exercises

use std::str::FromStr;
use crate::error::ExerciseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExerciseKind {
    Squat,
    Pushup,
    Pullup,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 3] = [ExerciseKind::Squat, ExerciseKind::Pushup, ExerciseKind::Pullup];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::Squat => "squat",
            ExerciseKind::Pushup => "pushup",
            ExerciseKind::Pullup => "pullup",
        }
    }

    /// Human-readable name for set logs and voice lines
    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseKind::Squat => "Squat",
            ExerciseKind::Pushup => "Push-up",
            ExerciseKind::Pullup => "Pull-up",
        }
    }
}

impl FromStr for ExerciseKind {
    type Err = ExerciseError;

    /// Accepts "squat", "pushup", "pullup", with optional "-" or "_"
    /// separators, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "squat" => Ok(ExerciseKind::Squat),
            "pushup" => Ok(ExerciseKind::Pushup),
            "pullup" => Ok(ExerciseKind::Pullup),
            _ => Err(ExerciseError::UnknownExercise(s.to_string())),
        }
    }
}

impl std::fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
