pub mod anthropic;
pub mod openai;

use std::sync::Arc;
use crate::config::config_manager::ConfigManager;
use crate::errors::{QalyzerError, QalyzerResult};
use crate::services::ai_providers::anthropic::AnthropicProvider;
use crate::services::ai_providers::openai::OpenAIProvider;
use crate::structs::config::config::Config;
use crate::traits::ai_provider::AiProvider;

/// Builds the provider named in `[ai]`, reading its key from the environment.
pub fn create_provider(config: &Config) -> QalyzerResult<Arc<dyn AiProvider>> {
    let api_key = ConfigManager::api_key(config)?;

    match config.ai.provider.to_lowercase().as_str() {
        "openai" => Ok(Arc::new(
            OpenAIProvider::new(api_key)
                .with_model(config.ai.model.clone())
                .with_max_tokens(config.ai.max_tokens),
        )),
        "anthropic" => Ok(Arc::new(
            AnthropicProvider::new(api_key)
                .with_model(config.ai.model.clone())
                .with_max_tokens(config.ai.max_tokens),
        )),
        other => Err(QalyzerError::config_error(
            &format!("Unknown AI provider: {}", other),
            Some("ai.provider"),
            Some("Use \"openai\" or \"anthropic\""),
        )),
    }
}
