//! Answer evaluation and feedback timing.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::events::AudioCue;

/// Result of comparing a selected option with the correct one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn is_correct(self) -> bool {
        self == Outcome::Correct
    }

    /// The sound cue that accompanies this outcome.
    pub fn cue(self) -> AudioCue {
        match self {
            Outcome::Correct => AudioCue::Correct,
            Outcome::Incorrect => AudioCue::Wrong,
        }
    }

    /// Feedback line shown while the answer is on screen.
    pub fn feedback_message(self) -> &'static str {
        match self {
            Outcome::Correct => "✅ Great Job! That's Correct! 🎉",
            Outcome::Incorrect => "❌ Oops! Try Again! 💪",
        }
    }
}

/// Compare a selection with the correct answer. Exact string equality.
pub fn evaluate(selected: &str, correct: &str) -> Outcome {
    if selected == correct {
        Outcome::Correct
    } else {
        Outcome::Incorrect
    }
}

/// How long feedback stays on screen before the next question loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTiming {
    pub correct: Duration,
    pub wrong: Duration,
}

impl FeedbackTiming {
    /// No delay at all; used for scripted play and tests.
    pub const IMMEDIATE: FeedbackTiming = FeedbackTiming {
        correct: Duration::ZERO,
        wrong: Duration::ZERO,
    };

    pub fn from_millis(correct_ms: u64, wrong_ms: u64) -> Self {
        Self {
            correct: Duration::from_millis(correct_ms),
            wrong: Duration::from_millis(wrong_ms),
        }
    }

    pub fn delay_for(&self, outcome: Outcome) -> Duration {
        match outcome {
            Outcome::Correct => self.correct,
            Outcome::Incorrect => self.wrong,
        }
    }
}

impl Default for FeedbackTiming {
    fn default() -> Self {
        Self::from_millis(2000, 2500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_strings_are_correct() {
        for x in ["a", "an", "the", "has been", "ÿ"] {
            assert_eq!(evaluate(x, x), Outcome::Correct);
        }
    }

    #[test]
    fn different_strings_are_incorrect() {
        assert_eq!(evaluate("a", "an"), Outcome::Incorrect);
        assert_eq!(evaluate("An", "an"), Outcome::Incorrect);
        assert_eq!(evaluate("an ", "an"), Outcome::Incorrect);
        assert_eq!(evaluate("", "an"), Outcome::Incorrect);
    }

    #[test]
    fn default_delays() {
        let timing = FeedbackTiming::default();
        assert_eq!(timing.delay_for(Outcome::Correct), Duration::from_millis(2000));
        assert_eq!(timing.delay_for(Outcome::Incorrect), Duration::from_millis(2500));
    }

    #[test]
    fn outcome_cues() {
        assert_eq!(Outcome::Correct.cue(), AudioCue::Correct);
        assert_eq!(Outcome::Incorrect.cue(), AudioCue::Wrong);
    }
}
