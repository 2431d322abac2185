use std::fmt;
use serde::{Deserialize, Serialize};

/// Identifies a section of a model reply, independently of its position in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Overall,
    Summary,
    Security,
    Performance,
    Readability,
    Testing,
    QuickTips,
    TestsIntro,
    Framework,
    Scenarios,
    TestCode,
    Instructions,
    Notes,
    SmellsOverview,
    CriticalSmells,
    MinorSmells,
    Priorities,
    Improvements,
    Complexity,
    BestPractices,
}

impl SectionKey {
    /// The four quality dimensions that feed the overall score.
    pub fn is_category(&self) -> bool {
        matches!(
            self,
            SectionKey::Security | SectionKey::Performance | SectionKey::Readability | SectionKey::Testing
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Overall => "overall",
            SectionKey::Summary => "summary",
            SectionKey::Security => "security",
            SectionKey::Performance => "performance",
            SectionKey::Readability => "readability",
            SectionKey::Testing => "testing",
            SectionKey::QuickTips => "quick_tips",
            SectionKey::TestsIntro => "tests_intro",
            SectionKey::Framework => "framework",
            SectionKey::Scenarios => "scenarios",
            SectionKey::TestCode => "test_code",
            SectionKey::Instructions => "instructions",
            SectionKey::Notes => "notes",
            SectionKey::SmellsOverview => "smells_overview",
            SectionKey::CriticalSmells => "critical_smells",
            SectionKey::MinorSmells => "minor_smells",
            SectionKey::Priorities => "priorities",
            SectionKey::Improvements => "improvements",
            SectionKey::Complexity => "complexity",
            SectionKey::BestPractices => "best_practices",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
