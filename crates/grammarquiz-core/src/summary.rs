//! End-of-game summary and outcome tiers.

use serde::{Deserialize, Serialize};

/// One of four fixed percentage bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// 100%.
    Perfect,
    /// 80% and up.
    Excellent,
    /// 60% and up.
    Good,
    NiceTry,
}

impl Tier {
    pub fn for_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= 100 => Tier::Perfect,
            p if p >= 80 => Tier::Excellent,
            p if p >= 60 => Tier::Good,
            _ => Tier::NiceTry,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::Perfect => "PERFECT SCORE! You're a Grammar Star! ⭐",
            Tier::Excellent => "Excellent Work! You're doing great!",
            Tier::Good => "Good Job! Keep practicing!",
            Tier::NiceTry => "Nice Try! Let's practice more!",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Tier::Perfect => "🎉🏆🌟",
            Tier::Excellent => "🎊🎯",
            Tier::Good => "👍😊",
            Tier::NiceTry => "💪📚",
        }
    }
}

/// Final result of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub score: u32,
    pub total: usize,
    pub percentage: u32,
    pub tier: Tier,
}

/// Compute the summary for `score` correct answers out of `total`.
///
/// The percentage is rounded half up. A zero total yields 0%.
pub fn complete(score: u32, total: usize) -> Summary {
    let percentage = percentage(score, total);
    Summary {
        score,
        total,
        percentage,
        tier: Tier::for_percentage(percentage),
    }
}

fn percentage(score: u32, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = u64::from(score);
    let total = total as u64;
    ((200 * score + total) / (2 * total)) as u32
}
