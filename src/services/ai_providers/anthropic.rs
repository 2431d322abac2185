use async_trait::async_trait;
use reqwest::Client;

use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::anthropic::anthropic_message::AnthropicMessage;
use crate::structs::ai::anthropic::anthropic_message_request::AnthropicMessageRequest;
use crate::traits::ai_provider::AiProvider;

const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Clone)]
pub struct AnthropicProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    max_tokens: u32,
}

impl AnthropicProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: ANTHROPIC_BASE_URL.to_string(),
            client: Client::new(),
            model: "claude-3-5-sonnet-20241022".to_string(),
            max_tokens: 2048,
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn get_request(&self, system_prompt: String, user_prompts: Vec<String>, temperature: f32) -> AnthropicMessageRequest {
        let messages = user_prompts
            .into_iter()
            .map(|prompt| AnthropicMessage {
                role: "user".to_string(),
                content: prompt,
            })
            .collect();

        AnthropicMessageRequest {
            model: self.model.clone(),
            system: system_prompt,
            max_tokens: self.max_tokens,
            temperature: Some(temperature.clamp(0.0, 1.0)),
            messages,
        }
    }

    /// Concatenates the text blocks of a Messages API reply.
    fn extract_content(json: &serde_json::Value) -> Result<String, AiProviderError> {
        let blocks = json
            .get("content")
            .and_then(|content| content.as_array())
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))?;

        let text: String = blocks
            .iter()
            .filter(|block| block.get("type").and_then(|t| t.as_str()) == Some("text"))
            .filter_map(|block| block.get("text").and_then(|t| t.as_str()))
            .collect();

        if text.is_empty() {
            return Err(AiProviderError::SerializationError("No text block in response".to_string()));
        }
        Ok(text)
    }
}

#[async_trait]
impl AiProvider for AnthropicProvider {
    fn model(&self) -> String {
        self.model.clone()
    }

    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>, temperature: f32) -> Result<String, AiProviderError> {
        let url = format!("{}/messages", self.base_url);
        let request_body = self.get_request(system_prompt, user_prompts, temperature);
        log::debug!("📦 Request model: {}", request_body.model);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ Anthropic API Error Response: {}", error_text);

            return Err(match status.as_u16() {
                401 => AiProviderError::AuthenticationError(error_text),
                429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", error_text)),
                _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        Self::extract_content(&json)
    }
}
