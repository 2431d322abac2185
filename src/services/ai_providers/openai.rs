use async_trait::async_trait;
use reqwest::Client;

use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::openai::openai_message::OpenAIMessage;
use crate::structs::ai::openai::openai_request::OpenAIRequest;
use crate::traits::ai_provider::AiProvider;

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Clone)]
pub struct OpenAIProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    max_tokens: u32,
}

impl OpenAIProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: OPENAI_BASE_URL.to_string(),
            client: Client::new(),
            model: "gpt-3.5-turbo".to_string(),
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

    fn get_openai_messages(&self, system_prompt: String, user_prompts: Vec<String>) -> Vec<OpenAIMessage> {
        let mut messages = Vec::new();

        if !system_prompt.is_empty() {
            messages.push(OpenAIMessage {
                role: "system".to_string(),
                content: system_prompt,
            });
        }

        messages.extend(user_prompts.into_iter().map(|prompt| OpenAIMessage {
            role: "user".to_string(),
            content: prompt,
        }));

        messages
    }

    fn get_request(&self, system_prompt: String, user_prompts: Vec<String>, temperature: f32) -> OpenAIRequest {
        OpenAIRequest {
            model: self.model.clone(),
            messages: self.get_openai_messages(system_prompt, user_prompts),
            max_tokens: Some(self.max_tokens),
            temperature: Some(temperature),
            stream: false,
        }
    }

    async fn make_request(&self, url: String, request_body: OpenAIRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", request_body.model);

        self.client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }

    fn extract_content(json: &serde_json::Value) -> Result<String, AiProviderError> {
        json.get("choices")
            .and_then(|choices| choices.as_array())
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(|content| content.to_string())
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))
    }

    pub async fn get_non_streaming_response(
        &self,
        system_prompt: String,
        user_prompts: Vec<String>,
        temperature: f32,
    ) -> Result<String, AiProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = self.get_request(system_prompt, user_prompts, temperature);

        let response = self.make_request(url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ OpenAI API Error Response: {}", error_text);

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

#[async_trait]
impl AiProvider for OpenAIProvider {
    fn model(&self) -> String {
        self.model.clone()
    }

    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>, temperature: f32) -> Result<String, AiProviderError> {
        self.get_non_streaming_response(system_prompt, user_prompts, temperature).await
    }
}
