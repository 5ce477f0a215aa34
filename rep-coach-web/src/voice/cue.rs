//! Picks what, if anything, to say for a frame's status

use crate::exercise::ExerciseStatus;

/// A line for the voice coach
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cue {
    pub text: String,
    pub is_count: bool,
}

/// Cue for a status, given the rep count seen on the previous frame
///
/// A new rep is announced as its number. Otherwise the feedback line is
/// offered, except when it is just the count left on screen from an
/// earlier rep. Debouncing is the coach's job, not this function's.
pub fn next_cue(previous_reps: u32, status: &ExerciseStatus) -> Option<Cue> {
    if status.reps > previous_reps {
        return Some(Cue {
            text: status.reps.to_string(),
            is_count: true,
        });
    }

    let feedback = status.feedback.trim();
    if feedback.is_empty() || feedback.parse::<u32>().is_ok() {
        return None;
    }

    Some(Cue {
        text: feedback.to_string(),
        is_count: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::Stage;

    fn status(reps: u32, feedback: &str) -> ExerciseStatus {
        ExerciseStatus {
            stage: Stage::Up,
            reps,
            feedback: feedback.to_string(),
            angle: 170,
            instruction: None,
            label: None,
        }
    }

    #[test]
    fn test_new_rep_is_count_cue() {
        let cue = next_cue(2, &status(3, "3")).unwrap();
        assert_eq!(cue, Cue { text: "3".to_string(), is_count: true });
    }

    #[test]
    fn test_stale_count_is_silent() {
        assert!(next_cue(3, &status(3, "3")).is_none());
    }

    #[test]
    fn test_feedback_cue() {
        let cue = next_cue(0, &status(0, "Lower your hips")).unwrap();
        assert!(!cue.is_count);
        assert_eq!(cue.text, "Lower your hips");
    }

    #[test]
    fn test_empty_feedback_is_silent() {
        assert!(next_cue(0, &status(0, "")).is_none());
    }
}
