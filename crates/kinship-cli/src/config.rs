//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use kinship_resolver::ResolverConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Resolver settings
    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".kinship").join("config.toml"))
    }

    /// Load configuration from `path`, or from the default path.
    ///
    /// A missing file yields the default configuration; an explicitly
    /// given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) if !path.exists() => {
                return Err(CliError::Config(format!(
                    "Config file '{}' does not exist",
                    path.display()
                )));
            }
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            Self::from_toml(&contents)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.resolver.validate()?;
        Ok(config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
