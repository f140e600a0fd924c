//! grammarquiz-core — question sequencing, answer evaluation, and scoring.
//!
//! This crate holds the game logic and nothing else. Rendering, sound, and
//! timers belong to the caller, which receives data-only events through a
//! [`events::QuizObserver`].

pub mod bank;
pub mod error;
pub mod evaluator;
pub mod events;
pub mod model;
pub mod session;
pub mod shuffle;
pub mod summary;

pub use error::QuizError;
pub use evaluator::{evaluate, FeedbackTiming, Outcome};
pub use events::{AudioCue, NoopObserver, QuizEvent, QuizObserver, RecordingObserver};
pub use model::{Question, QuestionBank};
pub use session::{AnswerRecord, PendingAdvance, Phase, QuizSession, SessionOptions};
pub use summary::{complete, Summary, Tier};
