use config::{Config, ConfigError, File as ConfigFile};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Path to the inventory document.
    #[serde(default = "default_inventory_path")]
    pub inventory_path: String,
    /// Directory the backup job writes artifacts into.
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,
    /// Content markers every backup is expected to carry.
    #[serde(default = "default_required_keywords")]
    pub required_keywords: Vec<String>,
    /// Glob patterns for artifacts the scanner should skip.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// Treat missing content markers as failures instead of warnings.
    #[serde(default)]
    pub strict_keywords: bool,
}

fn default_inventory_path() -> String {
    "inventory.yml".to_string()
}

fn default_backup_dir() -> String {
    "./configs".to_string()
}

fn default_required_keywords() -> Vec<String> {
    vec![
        "hostname".to_string(),
        "interface".to_string(),
        "version".to_string(),
    ]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inventory_path: default_inventory_path(),
            backup_dir: default_backup_dir(),
            required_keywords: default_required_keywords(),
            ignore_patterns: Vec::new(),
            strict_keywords: false,
        }
    }
}

pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
