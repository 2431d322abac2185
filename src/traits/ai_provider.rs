use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use crate::enums::ai_provider_error::AiProviderError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Model identifier recorded alongside each analysis.
    fn model(&self) -> String;

    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>, temperature: f32) -> Result<String, AiProviderError>;
}
