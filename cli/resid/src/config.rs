//! Configuration file handling.
//!
//! The config file is optional. Without `--config` the CLI looks for
//! `config.json` in the platform config directory and falls back to
//! defaults when it does not exist.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use caldav_resid::CalendarUserType;
use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::CliError;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the default config file path.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "caldav", "resid").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Calendar user type used by `encode` when `--type` is omitted.
    #[serde(default)]
    pub default_type: CalendarUserType,

    /// Output format used when `--format` is omitted.
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    /// Load config from `path`, or from the default location.
    ///
    /// An explicitly given path must exist; the default one may not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "config file {} does not exist",
                        path.display()
                    ))
                    .into());
                }
                Self::load_from(path)
            }
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => {
                    tracing::debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;

        tracing::debug!(
            path = %path.display(),
            default_type = %config.default_type,
            "config loaded"
        );
        Ok(config)
    }
}
