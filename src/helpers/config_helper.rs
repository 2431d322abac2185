use crate::config::constants::{ANALYSES_DIR_NAME, APP_DIR_NAME, OPENAI_API_KEY_ENV};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_provider() -> String {
        "openai".to_string()
    }

    pub fn default_model() -> String {
        "gpt-3.5-turbo".to_string()
    }

    pub fn default_max_tokens() -> u32 {
        2048
    }

    pub fn default_api_key_env() -> Option<String> {
        Some(OPENAI_API_KEY_ENV.to_string())
    }

    pub fn default_store_dir() -> String {
        dirs::home_dir()
            .map(|home| home.join(APP_DIR_NAME).join(ANALYSES_DIR_NAME))
            .unwrap_or_else(|| format!("./{}", ANALYSES_DIR_NAME).into())
            .to_string_lossy()
            .to_string()
    }

    pub fn default_format() -> String {
        "text".to_string()
    }

    pub fn default_verbose() -> bool {
        false
    }
}
