//! Transport error types.

use thiserror::Error;

/// Errors that can occur when calling the chat-completion endpoint.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The endpoint returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the endpoint asked us to wait.
        retry_after_secs: u64,
    },

    /// The response could not be turned into a verdict.
    #[error("parse error: {0}")]
    Parse(String),

    /// No endpoint is configured or the caller asked for offline mode.
    #[error("transport disabled")]
    Disabled,
}

impl LlmError {
    /// Whether another attempt may succeed.
    ///
    /// Status and transport failures are retried. Parse failures and a
    /// disabled transport are not.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Api { .. } | Self::RateLimited { .. }
        )
    }
}
