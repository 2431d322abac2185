use serde::{Deserialize, Serialize};

/// Display tier of a 1–10 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreTier {
    Low,
    Medium,
    Good,
    Excellent,
}

impl ScoreTier {
    pub fn from_score(score: Option<u8>) -> Option<Self> {
        match score? {
            1..=4 => Some(ScoreTier::Low),
            5..=6 => Some(ScoreTier::Medium),
            7..=8 => Some(ScoreTier::Good),
            9..=10 => Some(ScoreTier::Excellent),
            _ => None,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ScoreTier::Low => "🔴",
            ScoreTier::Medium => "🟠",
            ScoreTier::Good => "🟢",
            ScoreTier::Excellent => "✅",
        }
    }

    pub fn ansi_color(&self) -> &'static str {
        match self {
            ScoreTier::Low => "\x1b[31m",
            ScoreTier::Medium => "\x1b[33m",
            ScoreTier::Good => "\x1b[32m",
            ScoreTier::Excellent => "\x1b[1;32m",
        }
    }
}

/// Badge text for a score: `7/10`, or `N/A` outside the 1–10 range.
pub fn badge_text(score: Option<u8>) -> String {
    match (score, ScoreTier::from_score(score)) {
        (Some(value), Some(_)) => format!("{}/10", value),
        _ => "N/A".to_string(),
    }
}
