use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;
use crate::errors::{QalyzerError, QalyzerResult};
use crate::structs::analysis_record::AnalysisRecord;

const RECORD_EXTENSION: &str = "json";

/// One pretty-printed JSON file per analysis, named after its id.
pub struct AnalysisStore {
    root: PathBuf,
}

impl AnalysisStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn record_path(&self, id: &Uuid) -> PathBuf {
        self.root.join(format!("{}.{}", id, RECORD_EXTENSION))
    }

    pub fn save(&self, record: &AnalysisRecord) -> QalyzerResult<PathBuf> {
        fs::create_dir_all(&self.root).map_err(|e| {
            QalyzerError::file_error(&self.root.display().to_string(), "create directory", &e.to_string())
        })?;

        let path = self.record_path(&record.id);
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json)
            .map_err(|e| QalyzerError::file_error(&path.display().to_string(), "write", &e.to_string()))?;

        log::debug!("💾 Saved analysis {} to {}", record.id, path.display());
        Ok(path)
    }

    pub fn load(&self, id: &str) -> QalyzerResult<AnalysisRecord> {
        let id = Uuid::parse_str(id.trim())?;
        let path = self.record_path(&id);

        if !path.exists() {
            return Err(QalyzerError::not_found(&id.to_string()));
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| QalyzerError::file_error(&path.display().to_string(), "read", &e.to_string()))?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn delete(&self, id: &str) -> QalyzerResult<()> {
        let id = Uuid::parse_str(id.trim())?;
        let path = self.record_path(&id);

        if !path.exists() {
            return Err(QalyzerError::not_found(&id.to_string()));
        }

        fs::remove_file(&path)
            .map_err(|e| QalyzerError::file_error(&path.display().to_string(), "delete", &e.to_string()))?;
        log::info!("🗑️ Deleted analysis {}", id);
        Ok(())
    }

    /// Newest first, optionally restricted to one language (case-insensitive).
    /// Unreadable files are skipped with a warning.
    pub fn list(&self, language: Option<&str>) -> QalyzerResult<Vec<AnalysisRecord>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root).map_err(|e| {
            QalyzerError::file_error(&self.root.display().to_string(), "list", &e.to_string())
        })?;

        let mut records = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }

            match fs::read_to_string(&path).map(|content| serde_json::from_str::<AnalysisRecord>(&content)) {
                Ok(Ok(record)) => records.push(record),
                Ok(Err(e)) => log::warn!("⚠️ Skipping malformed record {}: {}", path.display(), e),
                Err(e) => log::warn!("⚠️ Skipping unreadable record {}: {}", path.display(), e),
            }
        }

        if let Some(language) = language.map(str::trim).filter(|l| !l.is_empty()) {
            records.retain(|record| record.language.eq_ignore_ascii_case(language));
        }

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    /// Distinct languages across stored analyses, sorted.
    pub fn languages(&self) -> QalyzerResult<Vec<String>> {
        let languages: BTreeSet<String> = self
            .list(None)?
            .into_iter()
            .map(|record| record.language)
            .filter(|language| !language.is_empty())
            .collect();

        Ok(languages.into_iter().collect())
    }
}
