//! User configuration, read from the platform config directory

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Colour token overrides as `#rrggbb` strings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ColorOverrides {
    pub lime: Option<String>,
    pub error: Option<String>,
    pub slate_100: Option<String>,
    pub slate_300: Option<String>,
    pub slate_500: Option<String>,
    pub slate_700: Option<String>,
    pub slate_900: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CalculatorConfig {
    pub colors: ColorOverrides,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: Option<String>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "mortgage-calc", "mortgage-calc")
}

impl CalculatorConfig {
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Where the log file goes
    pub fn log_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_local_dir().join("mortgage-calc.log"))
    }

    /// Load from the default location; a missing file gives the defaults
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();
        assert_eq!(config.colors, ColorOverrides::default());
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_partial_json() {
        let json = r##"{ "colors": { "lime": "#00ff00" } }"##;
        let config: CalculatorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.colors.lime.as_deref(), Some("#00ff00"));
        assert!(config.colors.error.is_none());
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("mortgage-calc-missing-config.json");
        let config = CalculatorConfig::load_from(&path).unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "mortgage-calc-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{ "log_filter": "mortgage_calc=debug" }"#).unwrap();
        let config = CalculatorConfig::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.log_filter.as_deref(), Some("mortgage_calc=debug"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "mortgage-calc-bad-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, "{ not json").unwrap();
        let result = CalculatorConfig::load_from(&path);
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }
}
