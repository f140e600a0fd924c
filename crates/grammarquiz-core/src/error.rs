//! Quiz error types.
//!
//! The taxonomy is small: a session can fail to start, a stray answer can be
//! dropped, and a question record can be rejected when it is constructed.

use thiserror::Error;

/// Errors produced by the quiz core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// `start` was called with no questions; no session begins.
    #[error("cannot start a quiz with an empty question set")]
    EmptyQuestionSet,

    /// An answer arrived while input was closed (feedback interval, idle, or
    /// finished session). Dropped silently by adapters.
    #[error("answer ignored: session is not accepting input")]
    InputIgnored,

    /// `advance` was called without an answered question waiting.
    #[error("no pending advance: session is not awaiting the next question")]
    NoPendingAdvance,

    /// A question needs at least two options.
    #[error("question {prompt:?} has {count} option(s), at least 2 required")]
    TooFewOptions { prompt: String, count: usize },

    /// The same option text appears twice in one question.
    #[error("question {prompt:?} lists option {option:?} more than once")]
    DuplicateOption { prompt: String, option: String },

    /// The labelled correct answer is not among the options.
    #[error("question {prompt:?}: correct answer {correct:?} is not one of its options")]
    CorrectOptionMissing { prompt: String, correct: String },

    /// No built-in topic has this id.
    #[error("unknown topic: {0}")]
    UnknownTopic(String),
}

impl QuizError {
    /// Returns `false` for errors that adapters should swallow without
    /// telling the player.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, QuizError::InputIgnored)
    }
}
