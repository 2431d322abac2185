use std::sync::Arc;
use crate::enums::analysis_mode::Mode;
use crate::errors::QalyzerResult;
use crate::helpers::prompt_generator;
use crate::logger::animated_logger::AnimatedLogger;
use crate::prompts::system_prompt::system_prompt;
use crate::services::analysis_store::AnalysisStore;
use crate::services::feedback_parser::parse_feedback_reconciled;
use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::parsed_feedback::ParsedFeedback;
use crate::traits::ai_provider::AiProvider;

pub const MODEL_ERROR_PREFIX: &str = "Erreur lors de l'appel au modèle : ";

/// A persisted analysis together with its structured view.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub record: AnalysisRecord,
    pub feedback: ParsedFeedback,
}

pub struct CodeAnalyzer {
    ai_provider: Arc<dyn AiProvider>,
    store: AnalysisStore,
    temperature_override: Option<f32>,
    show_progress: bool,
}

impl CodeAnalyzer {
    pub fn new(ai_provider: Arc<dyn AiProvider>, store: AnalysisStore) -> Self {
        Self {
            ai_provider,
            store,
            temperature_override: None,
            show_progress: true,
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature_override = temperature;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn temperature_for(&self, mode: Mode) -> f32 {
        self.temperature_override.unwrap_or_else(|| mode.default_temperature())
    }

    /// Raw model reply for `request`. A failed call yields an error sentence
    /// instead, which later parses to an empty result.
    pub async fn request_feedback(&self, request: &AnalysisRequest) -> String {
        let prompt = prompt_generator::build_prompt(&request.language, &request.code, request.mode);
        let temperature = self.temperature_for(request.mode);

        let label = format!("{} {} in progress", request.mode.emoji(), request.mode.display_name());
        let mut logger = if self.show_progress {
            AnimatedLogger::new(label)
        } else {
            AnimatedLogger::silent(label)
        };
        logger.start();

        let result = self
            .ai_provider
            .chat(system_prompt(request.mode).to_string(), vec![prompt], temperature)
            .await;

        match result {
            Ok(reply) => {
                logger.stop("Analysis complete").await;
                reply.trim().to_string()
            }
            Err(e) => {
                logger.error("Model call failed").await;
                log::error!("❌ Model call failed: {}", e);
                format!("{}{}", MODEL_ERROR_PREFIX, e)
            }
        }
    }

    /// Calls the model, stores the raw reply and returns it parsed.
    pub async fn analyze(&self, request: &AnalysisRequest) -> QalyzerResult<AnalysisOutcome> {
        log::info!(
            "🔍 Analyzing {} code with {} ({})",
            if request.language.is_empty() { "unlabeled" } else { request.language.as_str() },
            self.ai_provider.model(),
            request.mode
        );

        let raw = self.request_feedback(request).await;
        let record = AnalysisRecord::new(request, raw, &self.ai_provider.model());
        self.store.save(&record)?;

        let feedback = parse_feedback_reconciled(&record.feedback, record.mode);
        if feedback.is_empty() {
            log::warn!("⚠️ No structured section found in the model reply");
        }

        Ok(AnalysisOutcome { record, feedback })
    }
}
