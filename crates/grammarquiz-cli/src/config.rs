//! Game configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use grammarquiz_core::FeedbackTiming;

/// Top-level grammarquiz configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// How long correct-answer feedback stays up, in milliseconds.
    #[serde(default = "default_correct_delay")]
    pub correct_delay_ms: u64,
    /// How long wrong-answer feedback stays up, in milliseconds.
    #[serde(default = "default_wrong_delay")]
    pub wrong_delay_ms: u64,
    /// Ring the terminal bell on answer and completion cues.
    #[serde(default = "default_true")]
    pub sound: bool,
    /// Topic played when `--topic` is not given.
    #[serde(default = "default_topic")]
    pub default_topic: String,
    /// Fixed shuffle seed; random when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_correct_delay() -> u64 {
    2000
}
fn default_wrong_delay() -> u64 {
    2500
}
fn default_true() -> bool {
    true
}
fn default_topic() -> String {
    grammarquiz_core::bank::MIXED_TOPIC_ID.to_string()
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            correct_delay_ms: default_correct_delay(),
            wrong_delay_ms: default_wrong_delay(),
            sound: true,
            default_topic: default_topic(),
            seed: None,
        }
    }
}

impl QuizConfig {
    pub fn timing(&self) -> FeedbackTiming {
        FeedbackTiming::from_millis(self.correct_delay_ms, self.wrong_delay_ms)
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `grammarquiz.toml` in the current directory
/// 2. `~/.config/grammarquiz/config.toml`
///
/// Environment variable overrides: `GRAMMARQUIZ_SEED`, `GRAMMARQUIZ_SOUND`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("grammarquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    if let Ok(seed) = std::env::var("GRAMMARQUIZ_SEED") {
        let seed = seed
            .trim()
            .parse::<u64>()
            .with_context(|| format!("GRAMMARQUIZ_SEED is not a number: '{seed}'"))?;
        config.seed = Some(seed);
    }

    if let Ok(sound) = std::env::var("GRAMMARQUIZ_SOUND") {
        config.sound = parse_switch(&sound)
            .with_context(|| format!("GRAMMARQUIZ_SOUND must be on or off, got '{sound}'"))?;
    }

    Ok(config)
}

fn parse_config(content: &str) -> Result<QuizConfig> {
    Ok(toml::from_str(content)?)
}

fn parse_switch(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        other => anyhow::bail!("unrecognized switch value: {other}"),
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("grammarquiz"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.correct_delay_ms, 2000);
        assert_eq!(config.wrong_delay_ms, 2500);
        assert!(config.sound);
        assert_eq!(config.default_topic, "mixed");
        assert!(config.seed.is_none());
    }

    #[test]
    fn empty_file_means_defaults() {
        assert_eq!(parse_config("").unwrap(), QuizConfig::default());
    }

    #[test]
    fn parse_full_config() {
        let config = parse_config(
            r#"
correct_delay_ms = 500
wrong_delay_ms = 750
sound = false
default_topic = "articles"
seed = 42
"#,
        )
        .unwrap();
        assert_eq!(config.default_topic, "articles");
        assert_eq!(config.seed, Some(42));
        assert!(!config.sound);
        let timing = config.timing();
        assert_eq!(timing.correct, Duration::from_millis(500));
        assert_eq!(timing.wrong, Duration::from_millis(750));
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(parse_config("correct_delay_ms = \"soon\"").is_err());
    }

    #[test]
    fn switch_values() {
        assert!(parse_switch("ON").unwrap());
        assert!(!parse_switch(" off ").unwrap());
        assert!(!parse_switch("0").unwrap());
        assert!(parse_switch("maybe").is_err());
    }

    #[test]
    fn missing_explicit_path_errors() {
        let err = load_config_from(Some(Path::new("/nonexistent/grammarquiz.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        std::fs::write(&path, "default_topic = \"plurals\"\ncorrect_delay_ms = 10\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.default_topic, "plurals");
        assert_eq!(config.correct_delay_ms, 10);
        assert_eq!(config.wrong_delay_ms, 2500);
    }
}
