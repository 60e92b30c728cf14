//! Narrator configuration
//!
//! Configuration loaded from .gh-pr-narrator.toml file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Narrator configuration loaded from .gh-pr-narrator.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NarratorConfig {
    /// Context lines kept on each side of a change block
    #[serde(default = "default_context_size")]
    pub context_size: usize,

    /// Walkthrough budget per file (same unit as step durations)
    #[serde(default = "default_total_duration")]
    pub total_duration: u32,

    /// Number of files processed concurrently; 0 is treated as 1
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Pretty-print JSON output
    #[serde(default = "default_pretty_output")]
    pub pretty_output: bool,

    /// File extension → language name, checked before the built-in table
    #[serde(default)]
    pub language_overrides: BTreeMap<String, String>,
}

fn default_context_size() -> usize {
    3
}

fn default_total_duration() -> u32 {
    60
}

fn default_workers() -> usize {
    4
}

fn default_pretty_output() -> bool {
    true
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            context_size: default_context_size(),
            total_duration: default_total_duration(),
            workers: default_workers(),
            pretty_output: default_pretty_output(),
            language_overrides: BTreeMap::new(),
        }
    }
}

impl NarratorConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded narrator config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default narrator config");
        Self::default()
    }

    /// Load config from an explicit path. Unlike [`load`](Self::load), errors are returned.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::info!("Loaded narrator config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = NarratorConfig::default();
        assert_eq!(config.context_size, 3);
        assert_eq!(config.total_duration, 60);
        assert_eq!(config.workers, 4);
        assert!(config.pretty_output);
        assert!(config.language_overrides.is_empty());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            context_size = 5
            total_duration = 120

            [language_overrides]
            h = "cpp"
        "#;
        let config: NarratorConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.context_size, 5);
        assert_eq!(config.total_duration, 120);
        assert_eq!(config.language_overrides.get("h").map(String::as_str), Some("cpp"));
        // workers should use default
        assert_eq!(config.workers, 4);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: NarratorConfig = toml::from_str("").unwrap();
        assert_eq!(config, NarratorConfig::default());
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "workers = 8\npretty_output = false").unwrap();

        let config = NarratorConfig::load_from(file.path()).unwrap();
        assert_eq!(config.workers, 8);
        assert!(!config.pretty_output);
    }

    #[test]
    fn test_load_from_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "workers = \"many\"").unwrap();

        let err = NarratorConfig::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = NarratorConfig::load_from(Path::new("/nonexistent/narrator.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
