//! The `grammarquiz init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    let path = Path::new("grammarquiz.toml");
    if path.exists() {
        println!("grammarquiz.toml already exists, skipping.");
        return Ok(());
    }

    std::fs::write(path, SAMPLE_CONFIG).context("failed to write grammarquiz.toml")?;
    println!("Created grammarquiz.toml");

    println!("\nNext steps:");
    println!("  1. Run: grammarquiz topics");
    println!("  2. Run: grammarquiz play --topic articles");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# grammarquiz configuration

# How long feedback stays on screen before the next question (milliseconds).
correct_delay_ms = 2000
wrong_delay_ms = 2500

# Ring the terminal bell on correct, wrong, and game-complete cues.
sound = true

# Topic used when `play` is run without --topic. See `grammarquiz topics`.
default_topic = "mixed"

# Uncomment for a repeatable question order.
# seed = 42
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses() {
        let config: crate::config::QuizConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, crate::config::QuizConfig::default());
    }
}
