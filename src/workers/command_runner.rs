use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::analysis_mode::Mode;
use crate::enums::commands::Commands;
use crate::errors::{QalyzerError, QalyzerResult};
use crate::helpers::prompt_generator;
use crate::logger::report_logger::ReportLogger;
use crate::services::ai_providers::create_provider;
use crate::services::analysis_intake::IntakeService;
use crate::services::analysis_store::AnalysisStore;
use crate::services::code_analyzer::CodeAnalyzer;
use crate::services::feedback_parser::{parse_feedback, parse_feedback_reconciled};
use crate::services::presentation_cleaner::clean_feedback_for_export;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> QalyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init { force } => self.init_command(force),
            Commands::Analyze { file, code, language, title, mode, json } => {
                self.analyze_command(file, code, language, title, mode, json).await
            }
            Commands::Prompt { file, code, language, mode } => self.prompt_command(file, code, language, mode),
            Commands::Parse { input, mode, json, raw_scores } => self.parse_command(&input, mode, json, raw_scores),
            Commands::List { language, languages } => self.list_command(language, languages),
            Commands::Show { id, json } => self.show_command(&id, json),
            Commands::Export { id, output } => self.export_command(&id, output),
            Commands::Delete { id } => self.delete_command(&id),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn load_config() -> QalyzerResult<Config> {
        ConfigManager::load().map_err(|e| {
            log::error!("❌ Failed to load configuration: {}", e);
            log::error!("💡 Run 'qalyzer init' to create a configuration file.");
            e
        })
    }

    fn store(config: &Config) -> AnalysisStore {
        AnalysisStore::new(&config.output.store_dir)
    }

    fn init_command(&self, force: bool) -> QalyzerResult<()> {
        log::info!("🚀 Initializing qalyzer configuration...");

        let path = ConfigManager::create_sample_config(force)?;
        log::info!("✅ Configuration file created at {}", path.display());
        log::info!("🔧 Run 'qalyzer validate' to check your configuration.");
        Ok(())
    }

    fn intake(
        file: Option<PathBuf>,
        code: Option<String>,
        language: Option<String>,
        title: Option<String>,
        mode: Mode,
    ) -> QalyzerResult<AnalysisRequest> {
        let source = match file {
            Some(path) => Some(IntakeService::read_source_file(&path)?),
            None => None,
        };

        IntakeService::build_request(
            code.as_deref(),
            source.as_ref(),
            language.as_deref(),
            title.as_deref(),
            mode,
        )
    }

    async fn analyze_command(
        &self,
        file: Option<PathBuf>,
        code: Option<String>,
        language: Option<String>,
        title: Option<String>,
        mode: Mode,
        json: bool,
    ) -> QalyzerResult<()> {
        let config = Self::load_config()?;
        let request = Self::intake(file, code, language, title, mode)?;

        let provider = create_provider(&config)?;
        let json = json || config.output.format == "json";
        let analyzer = CodeAnalyzer::new(provider, Self::store(&config))
            .with_temperature(config.ai.temperature)
            .with_progress(!json);

        let outcome = analyzer.analyze(&request).await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&outcome.feedback)?);
        } else {
            ReportLogger::print_report(&outcome.record, &outcome.feedback);
            log::info!("💾 Saved as {}", outcome.record.id);
        }
        Ok(())
    }

    fn prompt_command(
        &self,
        file: Option<PathBuf>,
        code: Option<String>,
        language: Option<String>,
        mode: Mode,
    ) -> QalyzerResult<()> {
        let request = Self::intake(file, code, language, None, mode)?;
        print!("{}", prompt_generator::build_prompt_spec(&request).prompt);
        Ok(())
    }

    fn read_input(input: &Path) -> QalyzerResult<String> {
        if input.as_os_str() == "-" {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            return Ok(raw);
        }

        fs::read_to_string(input)
            .map_err(|e| QalyzerError::file_error(&input.display().to_string(), "read", &e.to_string()))
    }

    fn parse_command(&self, input: &Path, mode: Mode, json: bool, raw_scores: bool) -> QalyzerResult<()> {
        let raw = Self::read_input(input)?;
        let feedback = if raw_scores {
            parse_feedback(&raw, mode)
        } else {
            parse_feedback_reconciled(&raw, mode)
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&feedback)?);
        } else {
            println!("{}", ReportLogger::render(&feedback, mode, true));
        }
        Ok(())
    }

    fn list_command(&self, language: Option<String>, languages: bool) -> QalyzerResult<()> {
        let config = Self::load_config()?;
        let store = Self::store(&config);

        if languages {
            for language in store.languages()? {
                println!("{}", language);
            }
            return Ok(());
        }

        ReportLogger::print_history(&store.list(language.as_deref())?);
        Ok(())
    }

    fn show_command(&self, id: &str, json: bool) -> QalyzerResult<()> {
        let config = Self::load_config()?;
        let record = Self::store(&config).load(id)?;
        let feedback = parse_feedback_reconciled(&record.feedback, record.mode);

        if json || config.output.format == "json" {
            println!("{}", serde_json::to_string_pretty(&feedback)?);
        } else {
            ReportLogger::print_report(&record, &feedback);
        }
        Ok(())
    }

    fn export_command(&self, id: &str, output: Option<PathBuf>) -> QalyzerResult<()> {
        let config = Self::load_config()?;
        let record = Self::store(&config).load(id)?;

        let mut text = format!(
            "{}\n{} · {}\n\n",
            record.display_title(),
            record.mode.display_name(),
            record.language
        );
        text.push_str(&clean_feedback_for_export(&record.feedback, record.mode));
        text.push('\n');

        match output {
            Some(path) => {
                fs::write(&path, text)
                    .map_err(|e| QalyzerError::file_error(&path.display().to_string(), "write", &e.to_string()))?;
                log::info!("📄 Exported analysis {} to {}", record.id, path.display());
            }
            None => print!("{}", text),
        }
        Ok(())
    }

    fn delete_command(&self, id: &str) -> QalyzerResult<()> {
        let config = Self::load_config()?;
        Self::store(&config).delete(id)
    }

    fn validate_command(&self) -> QalyzerResult<()> {
        log::info!("🔍 Validating qalyzer configuration...");

        let config = Self::load_config()?;
        log::info!("✅ Configuration loaded");

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                log::info!("🤖 {} / {} (max {} tokens)", config.ai.provider, config.ai.model, config.ai.max_tokens);
                log::info!("💾 Analyses stored in {}", config.output.store_dir);
                Ok(())
            }
            Err(issues) => {
                log::error!("❌ Issues found:");
                for issue in &issues {
                    log::error!("   - {}", issue);
                }
                Err(QalyzerError::config_error(
                    &format!("{} configuration issue(s)", issues.len()),
                    None,
                    Some("Edit ~/qalyzer/config.toml"),
                ))
            }
        }
    }
}
