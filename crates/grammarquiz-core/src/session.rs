//! The question sequencer.
//!
//! A [`QuizSession`] walks a shuffled copy of a question list:
//!
//! ```text
//! Idle --start--> Active --submit--> AwaitingNext --advance--> Active ... --> Complete
//! ```
//!
//! `submit` hands back a [`PendingAdvance`] carrying the feedback delay. The
//! caller owns the timer: it waits that long, then calls
//! [`QuizSession::advance`]. While a transition is pending, input is closed
//! and every `submit` fails with [`QuizError::InputIgnored`] without touching
//! the score.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use uuid::Uuid;

use crate::error::QuizError;
use crate::evaluator::{evaluate, FeedbackTiming, Outcome};
use crate::events::{AudioCue, QuizEvent, QuizObserver};
use crate::model::Question;
use crate::shuffle::{shuffle, shuffled};
use crate::summary::{self, Summary};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Active,
    AwaitingNext,
    Complete,
}

/// Knobs for a new session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Fixed RNG seed for reproducible question and option order.
    pub seed: Option<u64>,
    pub timing: FeedbackTiming,
}

/// A transition the caller must fire after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    pub outcome: Outcome,
    pub delay: Duration,
}

/// What the player chose for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub prompt: String,
    pub selected: String,
    pub correct: String,
    pub outcome: Outcome,
}

/// One run through a shuffled question set.
pub struct QuizSession {
    id: Uuid,
    rng: StdRng,
    timing: FeedbackTiming,
    questions: Vec<Question>,
    /// Number of questions answered so far.
    position: usize,
    score: u32,
    phase: Phase,
    presented: Vec<String>,
    answers: Vec<AnswerRecord>,
}

impl QuizSession {
    pub fn new(options: SessionOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            id: Uuid::new_v4(),
            rng,
            timing: options.timing,
            questions: Vec::new(),
            position: 0,
            score: 0,
            phase: Phase::Idle,
            presented: Vec::new(),
            answers: Vec::new(),
        }
    }

    /// Begin a session over a shuffled copy of `questions` and present the
    /// first one. Calling it again restarts from scratch.
    pub fn start(
        &mut self,
        questions: &[Question],
        observer: &dyn QuizObserver,
    ) -> Result<(), QuizError> {
        if questions.is_empty() {
            tracing::warn!(session = %self.id, "refusing to start with no questions");
            return Err(QuizError::EmptyQuestionSet);
        }

        self.questions = questions.to_vec();
        shuffle(&mut self.questions, &mut self.rng);
        self.position = 0;
        self.score = 0;
        self.answers.clear();
        self.phase = Phase::Active;

        tracing::info!(session = %self.id, total = self.questions.len(), "quiz started");
        self.load_next(observer);
        Ok(())
    }

    /// Present the question at the current position, or finish the session
    /// when every question has been answered. Does nothing before `start` or
    /// after completion.
    pub fn load_next(&mut self, observer: &dyn QuizObserver) {
        if matches!(self.phase, Phase::Idle | Phase::Complete) {
            tracing::debug!(session = %self.id, phase = ?self.phase, "load_next ignored");
            return;
        }

        if self.position >= self.questions.len() {
            self.finish(observer);
            return;
        }

        let question = &self.questions[self.position];
        self.presented = shuffled(question.options(), &mut self.rng);
        self.phase = Phase::Active;

        tracing::debug!(
            session = %self.id,
            index = self.position,
            "question presented"
        );
        observer.on_event(&QuizEvent::QuestionPresented {
            prompt: question.prompt().to_string(),
            options: self.presented.clone(),
            index: self.position,
            total: self.questions.len(),
            score: self.score,
        });
    }

    /// Answer the current question.
    pub fn submit(
        &mut self,
        selected: &str,
        observer: &dyn QuizObserver,
    ) -> Result<PendingAdvance, QuizError> {
        if self.phase != Phase::Active {
            tracing::debug!(session = %self.id, phase = ?self.phase, "answer ignored");
            return Err(QuizError::InputIgnored);
        }

        let question = &self.questions[self.position];
        let outcome = evaluate(selected, question.correct());
        if outcome.is_correct() {
            self.score += 1;
        }
        self.answers.push(AnswerRecord {
            prompt: question.prompt().to_string(),
            selected: selected.to_string(),
            correct: question.correct().to_string(),
            outcome,
        });
        let correct_option = question.correct().to_string();
        self.position += 1;
        self.phase = Phase::AwaitingNext;

        tracing::debug!(session = %self.id, ?outcome, score = self.score, "answer evaluated");
        observer.on_event(&QuizEvent::AnswerFeedback {
            outcome,
            selected: selected.to_string(),
            correct_option,
            score: self.score,
        });
        observer.on_cue(outcome.cue());

        Ok(PendingAdvance {
            outcome,
            delay: self.timing.delay_for(outcome),
        })
    }

    /// Fire the transition scheduled by the last `submit`.
    pub fn advance(&mut self, observer: &dyn QuizObserver) -> Result<(), QuizError> {
        if self.phase != Phase::AwaitingNext {
            return Err(QuizError::NoPendingAdvance);
        }
        self.load_next(observer);
        Ok(())
    }

    fn finish(&mut self, observer: &dyn QuizObserver) {
        self.phase = Phase::Complete;
        self.presented.clear();

        let summary = summary::complete(self.score, self.questions.len());
        tracing::info!(
            session = %self.id,
            score = summary.score,
            total = summary.total,
            percentage = summary.percentage,
            "quiz complete"
        );
        observer.on_event(&QuizEvent::GameComplete {
            score: summary.score,
            total: summary.total,
            percentage: summary.percentage,
            tier: summary.tier,
            message: summary.tier.message().to_string(),
            emoji: summary.tier.emoji().to_string(),
        });
        observer.on_cue(AudioCue::Complete);
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Questions answered so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_accepting_input(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn timing(&self) -> FeedbackTiming {
        self.timing
    }

    /// The question awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Active => self.questions.get(self.position),
            _ => None,
        }
    }

    /// Options of the current question in presented order.
    pub fn presented_options(&self) -> &[String] {
        &self.presented
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Final summary, once the session is complete.
    pub fn summary(&self) -> Option<Summary> {
        (self.phase == Phase::Complete)
            .then(|| summary::complete(self.score, self.questions.len()))
    }
}
