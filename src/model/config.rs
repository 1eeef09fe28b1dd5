use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from habits.toml (every section optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme slot (e.g. `green = "#4EA85F"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Report file, relative to the data directory unless absolute
    #[serde(default = "default_export_path")]
    pub path: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            path: default_export_path(),
        }
    }
}

fn default_export_path() -> String {
    "stats_export.txt".to_string()
}
