//! Terminal presentation and sound.
//!
//! Two screens render the events the core emits: [`ConsoleScreen`] draws a
//! human-facing game, [`JsonScreen`] prints one JSON object per line for
//! scripted front-ends.

use std::io::Write;

use comfy_table::{Cell, Table};
use serde_json::json;

use grammarquiz_core::{AnswerRecord, AudioCue, Outcome, QuizEvent, QuizObserver};

/// Everything the play loop needs to show besides core events.
pub trait Screen: QuizObserver {
    /// The player typed something that is not one of the options.
    fn invalid_choice(&self, input: &str, option_count: usize);

    /// Per-question review after the game ends.
    fn review(&self, answers: &[AnswerRecord]);

    /// Ask whether to play another round. Returns `false` when the screen
    /// never replays.
    fn offer_replay(&self) -> bool;

    /// Input ended before the session did.
    fn input_closed(&self);
}

/// Human-facing terminal rendering.
pub struct ConsoleScreen {
    sound: bool,
}

impl ConsoleScreen {
    pub fn new(sound: bool) -> Self {
        Self { sound }
    }
}

fn flush() {
    if let Err(e) = std::io::stdout().flush() {
        tracing::debug!("stdout flush failed: {e}");
    }
}

impl QuizObserver for ConsoleScreen {
    fn on_event(&self, event: &QuizEvent) {
        match event {
            QuizEvent::QuestionPresented {
                prompt,
                options,
                index,
                total,
                score,
            } => {
                println!();
                println!("Question {} / {}    🏆 Score: {score}", index + 1, total);
                println!("{prompt}");
                for (i, option) in options.iter().enumerate() {
                    println!("  {}) {option}", i + 1);
                }
                print!("Your answer: ");
                flush();
            }
            QuizEvent::AnswerFeedback {
                outcome,
                correct_option,
                score,
                ..
            } => {
                println!("{}", outcome.feedback_message());
                if *outcome == Outcome::Incorrect {
                    println!("The correct answer is: {correct_option}");
                }
                println!("🏆 Score: {score}");
            }
            QuizEvent::GameComplete {
                score,
                total,
                percentage,
                message,
                emoji,
                ..
            } => {
                println!();
                println!("{emoji}");
                println!("🏆 Game Complete! 🏆");
                println!("Final Score: {score}/{total}");
                println!("{percentage}% Correct");
                println!("{message}");
            }
        }
    }

    fn on_cue(&self, cue: AudioCue) {
        tracing::debug!(cue = cue.name(), "sound cue");
        if self.sound {
            print!("\x07");
            flush();
        }
    }
}

impl Screen for ConsoleScreen {
    fn invalid_choice(&self, input: &str, option_count: usize) {
        println!("'{input}' is not an option. Enter a number from 1 to {option_count} or the answer text.");
        print!("Your answer: ");
        flush();
    }

    fn review(&self, answers: &[AnswerRecord]) {
        let mut table = Table::new();
        table.set_header(vec!["#", "Question", "Your answer", "Correct answer", "Result"]);
        for (i, answer) in answers.iter().enumerate() {
            let result = match answer.outcome {
                Outcome::Correct => "✅",
                Outcome::Incorrect => "❌",
            };
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(&answer.prompt),
                Cell::new(&answer.selected),
                Cell::new(&answer.correct),
                Cell::new(result),
            ]);
        }
        println!("\n{table}");
    }

    fn offer_replay(&self) -> bool {
        print!("\n🔄 Play again? [y/N] ");
        flush();
        true
    }

    fn input_closed(&self) {
        println!("\nInput closed, leaving the game.");
    }
}

/// JSON-lines rendering: every event and cue becomes one line on stdout.
pub struct JsonScreen;

impl JsonScreen {
    fn emit(&self, value: serde_json::Value) {
        println!("{value}");
    }
}

impl QuizObserver for JsonScreen {
    fn on_event(&self, event: &QuizEvent) {
        match serde_json::to_value(event) {
            Ok(value) => self.emit(value),
            Err(e) => tracing::error!("failed to serialize event: {e}"),
        }
    }

    fn on_cue(&self, cue: AudioCue) {
        self.emit(json!({
            "event": "cue",
            "cue": cue,
            "frequency_hz": cue.frequency_hz(),
            "gain": cue.gain(),
            "duration_ms": cue.duration_ms(),
        }));
    }
}

impl Screen for JsonScreen {
    fn invalid_choice(&self, input: &str, option_count: usize) {
        self.emit(json!({
            "event": "invalid_choice",
            "input": input,
            "option_count": option_count,
        }));
    }

    fn review(&self, _answers: &[AnswerRecord]) {}

    fn offer_replay(&self) -> bool {
        false
    }

    fn input_closed(&self) {
        self.emit(json!({ "event": "input_closed" }));
    }
}
