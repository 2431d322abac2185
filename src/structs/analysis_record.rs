use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::enums::analysis_mode::Mode;
use crate::structs::analysis_request::AnalysisRequest;

/// A stored analysis. The raw reply is kept verbatim and parsed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub title: Option<String>,
    pub language: String,
    pub code: String,
    pub mode: Mode,
    pub feedback: String,
    pub model: String,
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn new(request: &AnalysisRequest, feedback: String, model: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: request.title.clone(),
            language: request.language.clone(),
            code: request.code.clone(),
            mode: request.mode,
            feedback,
            model: model.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) if !title.trim().is_empty() => title.clone(),
            _ => format!("Analyse {} du {}", self.language, self.created_at.format("%d/%m/%Y %H:%M")),
        }
    }
}
