use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory CSV exports are written into.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    /// Optional directory with `<dataset>.json` files overriding the
    /// embedded sample documents.
    #[serde(default)]
    pub data_dir: Option<String>,
}

fn default_export_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".staff-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config file, falling back to defaults when it is missing
    /// or unreadable. Startup never fails because of configuration.
    pub fn load_or_default() -> Config {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.export_dir, ".");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_partial_config_round_trip() {
        let config: Config = serde_json::from_str(r#"{"data_dir": "/tmp/data"}"#).unwrap();
        assert_eq!(config.export_dir, ".");
        assert_eq!(config.data_dir.as_deref(), Some("/tmp/data"));
    }
}
