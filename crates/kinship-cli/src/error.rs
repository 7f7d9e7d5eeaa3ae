//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Resolver setup error
    #[error("Resolver error: {0}")]
    Resolver(#[from] kinship_resolver::ResolverError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// User not present in the snapshot
    #[error("Unknown user '{0}': not found by id or name in the snapshot")]
    UnknownUser(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
