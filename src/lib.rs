pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod prompts;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;

pub use crate::enums::analysis_mode::Mode;
pub use crate::enums::section_key::SectionKey;
pub use crate::helpers::prompt_generator::build_prompt;
pub use crate::services::feedback_parser::{parse_feedback, parse_feedback_reconciled};
pub use crate::structs::parsed_feedback::{ParsedFeedback, SectionFeedback};
