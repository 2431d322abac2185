use serde::{Deserialize, Serialize};
use crate::enums::analysis_mode::Mode;

/// A code snippet submitted for analysis. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub language: String,
    pub code: String,
    pub mode: Mode,
    #[serde(default)]
    pub title: Option<String>,
}

impl AnalysisRequest {
    pub fn new(language: &str, code: &str, mode: Mode) -> Self {
        Self {
            language: language.to_string(),
            code: code.to_string(),
            mode,
            title: None,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }
}
