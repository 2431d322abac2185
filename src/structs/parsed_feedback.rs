use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::enums::section_key::SectionKey;
use crate::structs::grammar::Grammar;

pub const NOT_AVAILABLE: &str = "not available";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFeedback {
    pub body: String,
    pub score: Option<u8>,
}

/// Structured view of a model reply. Always re-derived from the raw text.
///
/// A key present in `sections` means its header was seen, even when the body
/// is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFeedback {
    pub overall_score: Option<u8>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub overall_derived: bool,
    pub sections: BTreeMap<SectionKey, SectionFeedback>,
    pub correction: Option<String>,
}

impl ParsedFeedback {
    pub fn is_empty(&self) -> bool {
        self.overall_score.is_none() && self.sections.is_empty() && self.correction.is_none()
    }

    pub fn section(&self, key: SectionKey) -> Option<&SectionFeedback> {
        self.sections.get(&key)
    }

    pub fn score(&self, key: SectionKey) -> Option<u8> {
        self.sections.get(&key).and_then(|s| s.score)
    }

    pub fn body(&self, key: SectionKey) -> Option<&str> {
        self.sections.get(&key).map(|s| s.body.as_str())
    }

    /// Body for display; absent sections and blank bodies read "not available".
    pub fn display_body(&self, key: SectionKey) -> &str {
        match self.body(key) {
            Some(body) if !body.is_empty() => body,
            _ => NOT_AVAILABLE,
        }
    }

    /// Scores of the security, performance, readability and testing sections.
    pub fn category_scores(&self) -> impl Iterator<Item = (SectionKey, u8)> + '_ {
        self.sections
            .iter()
            .filter(|(key, _)| key.is_category())
            .filter_map(|(key, section)| section.score.map(|score| (*key, score)))
    }

    /// Fills a missing overall score with the rounded mean of the category
    /// scores. Grammars without an overall score are left untouched.
    pub fn reconcile(mut self, grammar: &Grammar) -> Self {
        if self.overall_score.is_some() || !grammar.has_overall_score {
            return self;
        }

        let scores: Vec<u8> = self.category_scores().map(|(_, score)| score).collect();
        if scores.is_empty() {
            return self;
        }

        let mean = scores.iter().map(|s| f64::from(*s)).sum::<f64>() / scores.len() as f64;
        self.overall_score = Some(mean.round().clamp(1.0, 10.0) as u8);
        self.overall_derived = true;
        self
    }
}
