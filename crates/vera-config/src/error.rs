//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment could not merge or extract the provider chain.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A section needed by the current command is missing required fields.
    #[error("Configuration section '{section}' is not configured: {hint}")]
    NotConfigured { section: String, hint: String },

    /// A field was present but failed validation.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
