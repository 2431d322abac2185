pub mod ai_providers;
pub mod analysis_intake;
pub mod analysis_store;
pub mod code_analyzer;
pub mod feedback_parser;
pub mod presentation_cleaner;
