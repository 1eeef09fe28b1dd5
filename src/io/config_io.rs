use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

pub const CONFIG_FILE: &str = "habits.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse habits.toml: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Read habits.toml from the data directory. A missing file is the default
/// config, not an error.
pub fn read_config(data_dir: &Path) -> Result<Config, ConfigError> {
    let path = data_dir.join(CONFIG_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(ConfigError::ReadError { path, source: e }),
    };
    Ok(toml::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = read_config(tmp.path()).unwrap();
        assert_eq!(config.export.path, "stats_export.txt");
        assert!(config.ui.colors.is_empty());
        assert!(!config.ui.show_key_hints);
    }

    #[test]
    fn reads_overrides() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r##"[ui]
show_key_hints = true

[ui.colors]
green = "#4EA85F"

[export]
path = "reports/latest.txt"
"##,
        )
        .unwrap();

        let config = read_config(tmp.path()).unwrap();
        assert!(config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("green").unwrap(), "#4EA85F");
        assert_eq!(config.export.path, "reports/latest.txt");
    }

    #[test]
    fn partial_sections_use_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[export]\n").unwrap();
        let config = read_config(tmp.path()).unwrap();
        assert_eq!(config.export.path, "stats_export.txt");
    }

    #[test]
    fn malformed_config_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[ui\nbroken").unwrap();
        assert!(matches!(
            read_config(tmp.path()),
            Err(ConfigError::ParseError(_))
        ));
    }
}
