use serde::Serialize;
use crate::structs::ai::anthropic::anthropic_message::AnthropicMessage;

#[derive(Serialize, Debug)]
pub struct AnthropicMessageRequest {
    pub model: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub system: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
    pub messages: Vec<AnthropicMessage>,
}
