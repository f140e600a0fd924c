//! Events the core emits for its presentation and audio collaborators.
//!
//! The core never renders or plays anything. It hands data-only events to a
//! [`QuizObserver`], which may draw them, serialize them, or ignore them.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::evaluator::Outcome;
use crate::summary::Tier;

/// Something the player should see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum QuizEvent {
    /// A question is on screen and input is open.
    QuestionPresented {
        prompt: String,
        /// Options in this presentation's shuffled order.
        options: Vec<String>,
        /// Zero-based index of this question in the session.
        index: usize,
        total: usize,
        score: u32,
    },
    /// The player answered; input stays closed until the next question.
    AnswerFeedback {
        outcome: Outcome,
        selected: String,
        correct_option: String,
        score: u32,
    },
    /// Every question has been answered.
    GameComplete {
        score: u32,
        total: usize,
        percentage: u32,
        tier: Tier,
        message: String,
        emoji: String,
    },
}

/// Named sound cues. How (or whether) they sound is up to the collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioCue {
    Correct,
    Wrong,
    Complete,
}

impl AudioCue {
    pub fn name(self) -> &'static str {
        match self {
            AudioCue::Correct => "correct",
            AudioCue::Wrong => "wrong",
            AudioCue::Complete => "complete",
        }
    }

    /// Oscillator frequency for a synthesized rendition of the cue.
    pub fn frequency_hz(self) -> f32 {
        match self {
            AudioCue::Correct => 523.25,
            AudioCue::Wrong => 200.0,
            AudioCue::Complete => 659.25,
        }
    }

    /// Starting gain; the tone ramps down exponentially from here.
    pub fn gain(self) -> f32 {
        match self {
            AudioCue::Correct | AudioCue::Complete => 0.3,
            AudioCue::Wrong => 0.2,
        }
    }

    pub fn duration_ms(self) -> u64 {
        match self {
            AudioCue::Correct => 500,
            AudioCue::Wrong => 300,
            AudioCue::Complete => 1000,
        }
    }
}

/// Receives everything the session emits.
pub trait QuizObserver: Send + Sync {
    fn on_event(&self, event: &QuizEvent);

    /// Sound cues are optional; the default drops them.
    fn on_cue(&self, _cue: AudioCue) {}
}

/// Observer that discards everything.
pub struct NoopObserver;

impl QuizObserver for NoopObserver {
    fn on_event(&self, _: &QuizEvent) {}
}

/// Observer that keeps every event and cue, in order.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<QuizEvent>>,
    cues: Mutex<Vec<AudioCue>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<QuizEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn cues(&self) -> Vec<AudioCue> {
        self.cues.lock().unwrap().clone()
    }

    pub fn last_event(&self) -> Option<QuizEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    /// Drop what has been recorded so far.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
        self.cues.lock().unwrap().clear();
    }
}

impl QuizObserver for RecordingObserver {
    fn on_event(&self, event: &QuizEvent) {
        self.events.lock().unwrap().push(event.clone());
    }

    fn on_cue(&self, cue: AudioCue) {
        self.cues.lock().unwrap().push(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_tag() {
        let event = QuizEvent::AnswerFeedback {
            outcome: Outcome::Incorrect,
            selected: "a".into(),
            correct_option: "an".into(),
            score: 0,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "answer_feedback");
        assert_eq!(json["outcome"], "incorrect");
        assert_eq!(json["correct_option"], "an");
    }

    #[test]
    fn cue_names_and_tones() {
        assert_eq!(AudioCue::Correct.name(), "correct");
        assert_eq!(AudioCue::Wrong.name(), "wrong");
        assert_eq!(AudioCue::Complete.name(), "complete");
        assert!(AudioCue::Complete.duration_ms() > AudioCue::Correct.duration_ms());
        assert!(AudioCue::Wrong.frequency_hz() < AudioCue::Correct.frequency_hz());
        assert_eq!(serde_json::to_string(&AudioCue::Wrong).unwrap(), "\"wrong\"");
    }

    #[test]
    fn recorder_keeps_order() {
        let rec = RecordingObserver::new();
        rec.on_cue(AudioCue::Correct);
        rec.on_cue(AudioCue::Complete);
        assert_eq!(rec.cues(), vec![AudioCue::Correct, AudioCue::Complete]);
        rec.clear();
        assert!(rec.cues().is_empty());
        assert!(rec.last_event().is_none());
    }
}
