//! Configuration for kinship resolution
//!
//! Controls gendering, the identity and fallback labels, and sibling
//! disambiguation.

use crate::ResolverError;
use serde::{Deserialize, Serialize};

/// Configuration for the resolver
///
/// # Examples
///
/// ```
/// use kinship_resolver::ResolverConfig;
///
/// let config = ResolverConfig::default();
/// assert!(config.apply_gender);
/// assert_eq!(config.self_label, "Me");
///
/// let config = ResolverConfig::neutral();
/// assert!(!config.apply_gender);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Substitute gendered terms ("Mother") for neutral ones ("Parent")
    /// Default: true
    #[serde(default = "default_true")]
    pub apply_gender: bool,

    /// Label returned when ego and alter are the same user
    /// Default: "Me"
    #[serde(default = "default_self_label")]
    pub self_label: String,

    /// Label returned for a path whose shape has no catalog rule
    /// Default: "Relative"
    #[serde(default = "default_fallback_label")]
    pub fallback_label: String,

    /// Compare full parent sets on `parent > child` paths to tell
    /// siblings from half-siblings
    /// Default: true
    #[serde(default = "default_true")]
    pub disambiguate_siblings: bool,
}

fn default_true() -> bool {
    true
}

fn default_self_label() -> String {
    "Me".to_string()
}

fn default_fallback_label() -> String {
    "Relative".to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            apply_gender: true,
            self_label: default_self_label(),
            fallback_label: default_fallback_label(),
            disambiguate_siblings: true,
        }
    }
}

impl ResolverConfig {
    /// Gender-neutral preset: labels are never gendered
    pub fn neutral() -> Self {
        Self {
            apply_gender: false,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ResolverError> {
        if self.self_label.trim().is_empty() {
            return Err(ResolverError::Config("self_label cannot be empty".to_string()));
        }
        if self.fallback_label.trim().is_empty() {
            return Err(ResolverError::Config(
                "fallback_label cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ResolverError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ResolverError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, ResolverError> {
        toml::to_string_pretty(self)
            .map_err(|e| ResolverError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
