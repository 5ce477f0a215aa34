//! Finished-set summary handed to the caller for persistence

use crate::exercise::ExerciseKind;

#[derive(Clone, Debug, PartialEq)]
pub struct SetLog {
    pub exercise: ExerciseKind,
    pub reps: u32,
    /// Added load, if the user entered one
    pub weight_kg: Option<f32>,
}

impl SetLog {
    /// Non-finite or negative weights are dropped
    pub fn new(exercise: ExerciseKind, reps: u32, weight_kg: Option<f32>) -> Self {
        Self {
            exercise,
            reps,
            weight_kg: weight_kg.filter(|w| w.is_finite() && *w >= 0.0),
        }
    }

    /// One-line summary, e.g. "Squat: 8 reps @ 60kg"
    pub fn summary(&self) -> String {
        let unit = if self.reps == 1 { "rep" } else { "reps" };
        match self.weight_kg {
            Some(w) => format!("{}: {} {} @ {}kg", self.exercise.display_name(), self.reps, unit, w),
            None => format!("{}: {} {}", self.exercise.display_name(), self.reps, unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_weight_dropped() {
        assert_eq!(SetLog::new(ExerciseKind::Squat, 5, Some(-3.0)).weight_kg, None);
        assert_eq!(SetLog::new(ExerciseKind::Squat, 5, Some(f32::NAN)).weight_kg, None);
        assert_eq!(SetLog::new(ExerciseKind::Squat, 5, Some(20.0)).weight_kg, Some(20.0));
    }

    #[test]
    fn test_summary() {
        assert_eq!(SetLog::new(ExerciseKind::Squat, 8, Some(60.0)).summary(), "Squat: 8 reps @ 60kg");
        assert_eq!(SetLog::new(ExerciseKind::Pullup, 1, None).summary(), "Pull-up: 1 rep");
    }
}
