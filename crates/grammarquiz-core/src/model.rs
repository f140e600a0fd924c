//! Core data model types for grammarquiz.
//!
//! A [`Question`] is validated once at construction and immutable afterwards;
//! a [`QuestionBank`] is a named list of them.

use serde::Serialize;
use std::collections::HashSet;

use crate::error::QuizError;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct: String,
}

impl Question {
    /// Build a question, checking that it has at least two distinct options
    /// and that `correct` is one of them.
    pub fn new<P, O, S, C>(prompt: P, options: O, correct: C) -> Result<Self, QuizError>
    where
        P: Into<String>,
        O: IntoIterator<Item = S>,
        S: Into<String>,
        C: Into<String>,
    {
        let prompt = prompt.into();
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let correct = correct.into();

        if options.len() < 2 {
            return Err(QuizError::TooFewOptions {
                count: options.len(),
                prompt,
            });
        }

        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(option.as_str()) {
                return Err(QuizError::DuplicateOption {
                    option: option.clone(),
                    prompt,
                });
            }
        }

        if !seen.contains(correct.as_str()) {
            return Err(QuizError::CorrectOptionMissing { prompt, correct });
        }

        Ok(Self {
            prompt,
            options,
            correct,
        })
    }

    /// The question text shown to the player.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Options in their declared order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The correct option.
    pub fn correct(&self) -> &str {
        &self.correct
    }
}

/// A named collection of questions.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionBank {
    /// Stable identifier (e.g. "articles").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// What the bank practises.
    pub description: String,
    /// The questions, in declared order.
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_question() {
        let q = Question::new("She ___ a doctor.", ["is", "are", "am"], "is").unwrap();
        assert_eq!(q.prompt(), "She ___ a doctor.");
        assert_eq!(q.options().len(), 3);
        assert_eq!(q.correct(), "is");
    }

    #[test]
    fn rejects_single_option() {
        let err = Question::new("Only one", ["a"], "a").unwrap_err();
        assert!(matches!(err, QuizError::TooFewOptions { count: 1, .. }));
    }

    #[test]
    fn rejects_duplicate_options() {
        let err = Question::new("Dupes", ["a", "an", "a"], "an").unwrap_err();
        assert!(matches!(err, QuizError::DuplicateOption { ref option, .. } if option == "a"));
    }

    #[test]
    fn rejects_missing_correct_option() {
        let err = Question::new("Missing", ["a", "an"], "the").unwrap_err();
        assert!(matches!(err, QuizError::CorrectOptionMissing { ref correct, .. } if correct == "the"));
    }

    #[test]
    fn question_serializes_with_correct_answer() {
        let q = Question::new("I ___ tired.", ["am", "is"], "am").unwrap();
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["correct"], "am");
        assert_eq!(json["options"][1], "is");
    }
}
