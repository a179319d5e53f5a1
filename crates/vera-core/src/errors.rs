//! Cross-cutting error types for Vera.
//!
//! Transport errors (`LlmError`) and configuration errors (`ConfigError`) live
//! in their own crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Vera crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (empty claim, out-of-range score).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A state transition was attempted that is not allowed.
    #[error("Invalid state transition: {from} on {event}")]
    InvalidTransition { from: String, event: String },

    /// A new claim was submitted while an analysis is still in flight.
    #[error("An analysis is already in progress")]
    Busy,

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
