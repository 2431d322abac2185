use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_store_dir")]
    pub store_dir: String,

    #[serde(default = "ConfigHelper::default_format")]
    pub format: String,

    #[serde(default = "ConfigHelper::default_verbose")]
    pub verbose: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            store_dir: ConfigHelper::default_store_dir(),
            format: ConfigHelper::default_format(),
            verbose: ConfigHelper::default_verbose(),
        }
    }
}
