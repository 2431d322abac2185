pub mod config;
pub mod ai_config;
pub mod output_config;
