use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{
    ANTHROPIC_API_KEY_ENV, APP_DIR_NAME, CONFIG_FILE_NAME, OPENAI_API_KEY_ENV, SUPPORTED_OUTPUT_FORMATS,
    SUPPORTED_PROVIDERS,
};
use crate::errors::{QalyzerError, QalyzerResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Qalyzer configuration

[ai]
# "openai" or "anthropic"
provider = "openai"
model = "gpt-3.5-turbo"
max_tokens = 2048

# Leave unset to use the default temperature of each analysis mode
# (standard 0.1, quick 0.4, tests 0.2, improve 0.3, smells 0.2)
# temperature = 0.1

# Environment variable holding the API key
api_key_env = "OPENAI_API_KEY"

[output]
# Directory where analyses are stored as JSON files
# store_dir = "~/qalyzer/analyses"

# "text" or "json"
format = "text"
verbose = false
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_config_path() -> QalyzerResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| QalyzerError::system_error("locate home directory", "no home directory for this user"))
    }

    pub fn load() -> QalyzerResult<Config> {
        Self::load_from(&Self::default_config_path()?)
    }

    /// Reads the config at `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> QalyzerResult<Config> {
        if !path.exists() {
            log::debug!("📋 No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| QalyzerError::file_error(&path.display().to_string(), "read", &e.to_string()))?;

        toml::from_str(&content).map_err(|e| QalyzerError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    pub fn create_sample_config(force: bool) -> QalyzerResult<PathBuf> {
        let path = Self::default_config_path()?;
        Self::create_sample_config_at(&path, force)?;
        Ok(path)
    }

    pub fn create_sample_config_at(path: &Path, force: bool) -> QalyzerResult<()> {
        if path.exists() && !force {
            return Err(QalyzerError::config_error(
                &format!("Config already exists at {}", path.display()),
                None,
                Some("Use --force to overwrite it"),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;

        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let provider = config.ai.provider.to_lowercase();
        if !SUPPORTED_PROVIDERS.contains(&provider.as_str()) {
            errors.push(format!(
                "Unknown AI provider '{}' (expected one of: {})",
                config.ai.provider,
                SUPPORTED_PROVIDERS.join(", ")
            ));
        }

        if config.ai.model.trim().is_empty() {
            errors.push("AI model must not be empty".to_string());
        }

        if config.ai.max_tokens == 0 {
            errors.push("max_tokens must be greater than 0".to_string());
        }

        if let Some(temperature) = config.ai.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                errors.push(format!("temperature must be between 0.0 and 2.0, got {}", temperature));
            }
        }

        if !SUPPORTED_OUTPUT_FORMATS.contains(&config.output.format.as_str()) {
            errors.push(format!(
                "Unknown output format '{}' (expected one of: {})",
                config.output.format,
                SUPPORTED_OUTPUT_FORMATS.join(", ")
            ));
        }

        let key_env = Self::api_key_env(config);
        if std::env::var(&key_env).map(|key| key.trim().is_empty()).unwrap_or(true) {
            errors.push(format!("API key environment variable '{}' is not set", key_env));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// The configured key variable, or the provider's conventional one.
    pub fn api_key_env(config: &Config) -> String {
        if let Some(env) = config.ai.api_key_env.as_ref().filter(|env| !env.trim().is_empty()) {
            return env.clone();
        }

        match config.ai.provider.to_lowercase().as_str() {
            "anthropic" => ANTHROPIC_API_KEY_ENV.to_string(),
            _ => OPENAI_API_KEY_ENV.to_string(),
        }
    }

    pub fn api_key(config: &Config) -> QalyzerResult<String> {
        let key_env = Self::api_key_env(config);
        std::env::var(&key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                QalyzerError::config_error(
                    &format!("Missing API key in environment variable {}", key_env),
                    Some("ai.api_key_env"),
                    Some(&format!("export {}=<your key>", key_env)),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigManager::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_sample_config_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("qalyzer").join("config.toml");

        ConfigManager::create_sample_config_at(&path, false).unwrap();
        let config = ConfigManager::load_from(&path).unwrap();

        assert_eq!(config.ai.provider, "openai");
        assert_eq!(config.ai.model, "gpt-3.5-turbo");
        assert_eq!(config.ai.temperature, None);
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn test_sample_config_is_not_overwritten_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ai]\nmodel = \"custom\"\n").unwrap();

        assert!(ConfigManager::create_sample_config_at(&path, false).is_err());
        assert_eq!(ConfigManager::load_from(&path).unwrap().ai.model, "custom");

        ConfigManager::create_sample_config_at(&path, true).unwrap();
        assert_eq!(ConfigManager::load_from(&path).unwrap().ai.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_invalid_toml_is_a_config_file_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ai\nprovider = ").unwrap();

        let error = ConfigManager::load_from(&path).unwrap_err();
        assert!(matches!(error, QalyzerError::ConfigurationFileError { .. }));
    }

    #[test]
    fn test_validation_reports_every_problem() {
        let mut config = Config::default();
        config.ai.provider = "mistral".to_string();
        config.ai.max_tokens = 0;
        config.ai.temperature = Some(3.5);
        config.output.format = "pdf".to_string();
        config.ai.api_key_env = Some("QALYZER_TEST_UNSET_KEY_VARIABLE".to_string());

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_validation_accepts_present_key() {
        let mut config = Config::default();
        config.ai.api_key_env = Some("PATH".to_string());
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn test_api_key_env_falls_back_per_provider() {
        let mut config = Config::default();
        config.ai.provider = "anthropic".to_string();
        config.ai.api_key_env = None;
        assert_eq!(ConfigManager::api_key_env(&config), ANTHROPIC_API_KEY_ENV);
    }
}
