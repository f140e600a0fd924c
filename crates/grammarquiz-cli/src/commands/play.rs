//! The `grammarquiz play` command.

use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use grammarquiz_core::bank;
use grammarquiz_core::{
    FeedbackTiming, PendingAdvance, Phase, Question, QuizSession, SessionOptions,
};

use crate::config::load_config_from;
use crate::screen::{ConsoleScreen, JsonScreen, Screen};

/// How a session loop ended.
#[derive(Debug, PartialEq, Eq)]
enum SessionEnd {
    Complete,
    InputClosed,
}

pub async fn execute(
    topic: Option<String>,
    seed: Option<u64>,
    fast: bool,
    json: bool,
    no_sound: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let topic = topic.unwrap_or_else(|| config.default_topic.clone());
    let question_bank = bank::load_topic(&topic)?;
    tracing::info!(
        topic = %question_bank.id,
        questions = question_bank.len(),
        "loaded question bank"
    );

    let timing = if fast {
        FeedbackTiming::IMMEDIATE
    } else {
        config.timing()
    };
    let options = SessionOptions {
        seed: seed.or(config.seed),
        timing,
    };

    let mut input = spawn_input_reader();

    if json {
        play(&JsonScreen, &question_bank.questions, options, &mut input).await
    } else {
        let screen = ConsoleScreen::new(config.sound && !no_sound);
        println!("📚 {} ({} questions)", question_bank.name, question_bank.len());
        play(&screen, &question_bank.questions, options, &mut input).await
    }
}

/// Read stdin lines on a dedicated thread so a pending read never holds the
/// runtime open at exit.
fn spawn_input_reader() -> UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("stdin read failed: {e}");
                    break;
                }
            }
        }
    });
    rx
}

async fn play<S: Screen>(
    screen: &S,
    questions: &[Question],
    options: SessionOptions,
    input: &mut UnboundedReceiver<String>,
) -> Result<()> {
    let mut session = QuizSession::new(options);

    loop {
        session.start(questions, screen)?;
        if run_session(&mut session, screen, input).await? == SessionEnd::InputClosed {
            screen.input_closed();
            return Ok(());
        }

        screen.review(session.answers());
        if !screen.offer_replay() {
            return Ok(());
        }
        match input.recv().await {
            Some(answer) if is_yes(&answer) => continue,
            _ => return Ok(()),
        }
    }
}

async fn run_session<S: Screen>(
    session: &mut QuizSession,
    screen: &S,
    input: &mut UnboundedReceiver<String>,
) -> Result<SessionEnd> {
    while session.phase() != Phase::Complete {
        let Some(line) = input.recv().await else {
            return Ok(SessionEnd::InputClosed);
        };

        let Some(choice) = parse_choice(&line, session.presented_options()) else {
            if !line.trim().is_empty() {
                screen.invalid_choice(line.trim(), session.presented_options().len());
            }
            continue;
        };

        match session.submit(&choice, screen) {
            Ok(pending) => wait_then_advance(session, pending, screen, input).await?,
            Err(e) if !e.is_user_visible() => tracing::debug!("{e}"),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(SessionEnd::Complete)
}

/// Hold the feedback on screen for the pending delay, dropping anything
/// typed meanwhile, then fire the advance.
async fn wait_then_advance<S: Screen>(
    session: &mut QuizSession,
    pending: PendingAdvance,
    screen: &S,
    input: &mut UnboundedReceiver<String>,
) -> Result<()> {
    if !pending.delay.is_zero() {
        let timer = tokio::time::sleep(pending.delay);
        tokio::pin!(timer);
        loop {
            tokio::select! {
                _ = &mut timer => break,
                line = input.recv() => match line {
                    Some(line) => {
                        if let Err(e) = session.submit(line.trim(), screen) {
                            tracing::debug!(input = %line.trim(), "dropped during feedback: {e}");
                        }
                    }
                    None => {
                        (&mut timer).await;
                        break;
                    }
                },
            }
        }
    }
    session.advance(screen)?;
    Ok(())
}

/// Map a typed line to one of the presented options: a 1-based number or
/// the option text (ASCII case-insensitive).
fn parse_choice(line: &str, options: &[String]) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if let Ok(n) = line.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).cloned();
    }
    options
        .iter()
        .find(|o| o.eq_ignore_ascii_case(line))
        .cloned()
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use grammarquiz_core::RecordingObserver;
    use std::time::Duration;

    fn opts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn choice_by_number() {
        let options = opts(&["a", "an", "the"]);
        assert_eq!(parse_choice("2", &options).as_deref(), Some("an"));
        assert_eq!(parse_choice(" 3 ", &options).as_deref(), Some("the"));
        assert_eq!(parse_choice("0", &options), None);
        assert_eq!(parse_choice("4", &options), None);
    }

    #[test]
    fn choice_by_text() {
        let options = opts(&["A", "An", "The"]);
        assert_eq!(parse_choice("the", &options).as_deref(), Some("The"));
        assert_eq!(parse_choice("some", &options), None);
        assert_eq!(parse_choice("   ", &options), None);
    }

    #[test]
    fn yes_answers() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
    }

    fn make_session(timing: FeedbackTiming) -> QuizSession {
        QuizSession::new(SessionOptions {
            seed: Some(1),
            timing,
        })
    }

    #[tokio::test(start_paused = true)]
    async fn input_during_feedback_is_dropped() {
        let questions = vec![
            Question::new("I ___ ready.", ["am", "is"], "am").unwrap(),
            Question::new("You ___ ready.", ["are", "is"], "are").unwrap(),
        ];
        let mut session = make_session(FeedbackTiming::from_millis(2000, 2500));
        let rec = RecordingObserver::new();
        session.start(&questions, &rec).unwrap();

        let correct = session.current_question().unwrap().correct().to_string();
        let pending = session.submit(&correct, &rec).unwrap();
        assert_eq!(pending.delay, Duration::from_millis(2000));

        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(correct.clone()).unwrap();
        tx.send("1".to_string()).unwrap();

        let start = tokio::time::Instant::now();
        wait_then_advance(&mut session, pending, &ConsoleScreen::new(false), &mut rx)
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_millis(2000));
        assert_eq!(session.score(), 1);
        assert_eq!(session.position(), 1);
        assert_eq!(session.phase(), Phase::Active);
    }

    #[tokio::test]
    async fn immediate_timing_advances_without_waiting() {
        let questions = vec![Question::new("I ___ ready.", ["am", "is"], "am").unwrap()];
        let mut session = make_session(FeedbackTiming::IMMEDIATE);
        let rec = RecordingObserver::new();
        session.start(&questions, &rec).unwrap();

        let pending = session.submit("is", &rec).unwrap();
        let (_tx, mut rx) = mpsc::unbounded_channel::<String>();
        wait_then_advance(&mut session, pending, &JsonScreen, &mut rx)
            .await
            .unwrap();
        assert_eq!(session.phase(), Phase::Complete);
    }

    #[tokio::test]
    async fn session_ends_when_input_closes() {
        let questions = vec![Question::new("I ___ ready.", ["am", "is"], "am").unwrap()];
        let mut session = make_session(FeedbackTiming::IMMEDIATE);
        session.start(&questions, &JsonScreen).unwrap();

        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        drop(tx);
        let end = run_session(&mut session, &JsonScreen, &mut rx).await.unwrap();
        assert_eq!(end, SessionEnd::InputClosed);
        assert_eq!(session.position(), 0);
    }

    #[tokio::test]
    async fn invalid_lines_do_not_count_as_answers() {
        let questions = vec![Question::new("I ___ ready.", ["am", "is"], "am").unwrap()];
        let mut session = make_session(FeedbackTiming::IMMEDIATE);
        session.start(&questions, &JsonScreen).unwrap();

        let (tx, mut rx) = mpsc::unbounded_channel();
        for line in ["", "7", "maybe", "am"] {
            tx.send(line.to_string()).unwrap();
        }
        let end = run_session(&mut session, &JsonScreen, &mut rx).await.unwrap();
        assert_eq!(end, SessionEnd::Complete);
        assert_eq!(session.score(), 1);
        assert_eq!(session.answers().len(), 1);
    }
}
