use std::fmt;
use std::str::FromStr;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use crate::errors::QalyzerError;

/// The five analysis flavors. Each one owns a grammar in `constants::grammars`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Full expert review with strict rubrics.
    Standard,
    /// Shorter, lenient review.
    Quick,
    /// Automatic unit test generation.
    Tests,
    /// Refactoring proposals, no numeric rubric.
    Improve,
    /// Code smell detection.
    Smells,
}

impl Mode {
    pub const ALL: [Mode; 5] = [Mode::Standard, Mode::Quick, Mode::Tests, Mode::Improve, Mode::Smells];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Standard => "standard",
            Mode::Quick => "quick",
            Mode::Tests => "tests",
            Mode::Improve => "improve",
            Mode::Smells => "smells",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Standard => "Analyse expert",
            Mode::Quick => "Analyse rapide",
            Mode::Tests => "Tests auto",
            Mode::Improve => "Refactoring",
            Mode::Smells => "Code smells",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mode::Standard => "🧠",
            Mode::Quick => "⚡",
            Mode::Tests => "🧪",
            Mode::Improve => "🛠️",
            Mode::Smells => "👃",
        }
    }

    /// Sampling temperature used when the configuration does not pin one.
    pub fn default_temperature(&self) -> f32 {
        match self {
            Mode::Standard => 0.1,
            Mode::Quick => 0.4,
            Mode::Tests => 0.2,
            Mode::Improve => 0.3,
            Mode::Smells => 0.2,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = QalyzerError;

    /// Accepts the canonical names as well as the legacy storage tags
    /// (`claude` for the expert review, `openai` for the quick one).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "expert" | "claude" => Ok(Mode::Standard),
            "quick" | "rapide" | "openai" => Ok(Mode::Quick),
            "tests" | "test" => Ok(Mode::Tests),
            "improve" | "refactor" | "refactoring" => Ok(Mode::Improve),
            "smells" | "smell" => Ok(Mode::Smells),
            other => Err(QalyzerError::validation_error(
                "mode",
                other,
                "one of standard, quick, tests, improve, smells",
                Some("Use --mode standard for a full review"),
            )),
        }
    }
}
