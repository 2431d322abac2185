pub mod ai_provider_error;
pub mod analysis_mode;
pub mod commands;
pub mod score_tier;
pub mod section_key;
