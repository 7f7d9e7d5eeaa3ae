//! Error types for resolver construction

use thiserror::Error;

/// Errors that can occur while setting up a resolver
///
/// Resolution itself never fails: a missing path or an unknown shape are
/// ordinary outcomes reported in the result.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two catalog rules share a path shape
    #[error("Duplicate rule for path shape '{shape}' ('{first}' and '{second}')")]
    DuplicateShape {
        /// The shared shape
        shape: String,
        /// Label of the rule registered first
        first: String,
        /// Label of the conflicting rule
        second: String,
    },

    /// Snapshot source error
    #[error("Snapshot source error: {0}")]
    Source(String),
}
