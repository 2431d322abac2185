pub mod ai;
pub mod analysis_record;
pub mod analysis_request;
pub mod cli;
pub mod config;
pub mod grammar;
pub mod parsed_feedback;
pub mod prompt_spec;
pub mod source_file;
pub mod tests_detail;
