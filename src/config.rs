//! Configuration management for the prose inspector.
//!
//! Handles:
//! - Command-line argument parsing
//! - The TOML run configuration listing validators and their options

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::validator::ValidatorOptions;

/// Command-line arguments for the prose inspector
#[derive(Debug, Parser)]
#[command(name = "prosevet")]
#[command(about = "Rule-based prose inspection for plain-text documents")]
#[command(version)]
pub struct Args {
    /// Document to inspect
    pub input: PathBuf,

    /// Run configuration (TOML) listing validators and options
    #[arg(long, help = "Path to a validator configuration TOML file")]
    pub config: Option<PathBuf>,

    /// Output format for findings
    #[arg(long, default_value = "plain", help = "Output format (plain, json)")]
    pub format: String,

    /// Log level for diagnostics
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// One `[[validator]]` entry in the run configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidatorConfig {
    pub name: String,
    #[serde(default)]
    pub options: ValidatorOptions,
}

/// The full run configuration: which validators run, with which options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RunConfig {
    #[serde(default, rename = "validator")]
    pub validators: Vec<ValidatorConfig>,
}

impl RunConfig {
    /// Parse a TOML run configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("malformed config {}", path.display()))
    }

    /// The built-in validator set used when no configuration is given.
    pub fn default_set() -> Self {
        Self {
            validators: vec![
                ValidatorConfig {
                    name: "VoidSection".to_string(),
                    options: ValidatorOptions::default(),
                },
                ValidatorConfig {
                    name: "InvalidExpression".to_string(),
                    options: ValidatorOptions::default(),
                },
            ],
        }
    }

    /// Resolve the effective configuration: an explicit path wins, then a
    /// user-level config under the platform config directory, then the
    /// built-in default set.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("prosevet").join("config.toml");
            if user_config.is_file() {
                return Self::from_path(&user_config);
            }
        }
        Ok(Self::default_set())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_config() {
        let toml = r#"
            [[validator]]
            name = "VoidSection"

            [[validator]]
            name = "SuggestExpression"
            options = { dict = "suggest.dat" }
        "#;
        let config: RunConfig = toml::from_str(toml).expect("parse config");
        assert_eq!(config.validators.len(), 2);
        assert_eq!(config.validators[0].name, "VoidSection");
        assert_eq!(
            config.validators[1].options.get_string("dict"),
            Some("suggest.dat")
        );
    }

    #[test]
    fn test_mixed_option_types() {
        let toml = r#"
            [[validator]]
            name = "Example"
            options = { dict = "d.dat", strict = true, limit = 5.0 }
        "#;
        let config: RunConfig = toml::from_str(toml).expect("parse config");
        let options = &config.validators[0].options;
        assert_eq!(options.get_string("dict"), Some("d.dat"));
        assert_eq!(options.get_bool("strict"), Some(true));
        assert_eq!(options.get_number("limit"), Some(5.0));
    }

    #[test]
    fn test_default_set() {
        let config = RunConfig::default_set();
        let names: Vec<&str> = config.validators.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["VoidSection", "InvalidExpression"]);
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: RunConfig = toml::from_str("").expect("parse empty config");
        assert!(config.validators.is_empty());
    }
}
