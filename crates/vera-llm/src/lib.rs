//! # vera-llm
//!
//! Chat-completion client for Vera.
//!
//! Builds the fact-checking request for a [`ClaimQuery`], sends it through a
//! [`ChatTransport`] with bounded exponential-backoff retry, and parses the
//! model's (optionally fenced) JSON answer into a [`VerdictResult`].

pub mod parse;
pub mod request;
pub mod retry;
pub mod transport;

mod error;
mod http;

pub use error::LlmError;
pub use request::ChatRequest;
pub use retry::RetryPolicy;
pub use transport::{ChatTransport, HttpTransport, Transport};

use vera_config::VeraConfig;
use vera_core::{ClaimQuery, VerdictResult};

/// Retrying chat-completion client over any [`ChatTransport`].
pub struct LlmClient<T> {
    transport: T,
    policy: RetryPolicy,
    model: String,
    temperature: f64,
}

impl LlmClient<Transport> {
    /// Client for the configured endpoint, or a disabled one when `offline`
    /// is set or no key is configured.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the reqwest client cannot be built.
    pub fn from_config(config: &VeraConfig, offline: bool) -> Result<Self, LlmError> {
        let transport = Transport::from_config(&config.llm, offline)?;
        Ok(Self::new(
            transport,
            RetryPolicy::from(&config.retry),
            &config.llm.model,
            config.llm.temperature,
        ))
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.transport.is_enabled()
    }
}

impl<T: ChatTransport> LlmClient<T> {
    #[must_use]
    pub fn new(transport: T, policy: RetryPolicy, model: &str, temperature: f64) -> Self {
        Self {
            transport,
            policy,
            model: model.to_string(),
            temperature,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Assess `query` with the remote model.
    ///
    /// # Errors
    ///
    /// Returns the transport error once retries are exhausted, or
    /// [`LlmError::Parse`] if the answer is not a valid verdict.
    pub async fn analyze(&self, query: &ClaimQuery) -> Result<VerdictResult, LlmError> {
        let request = ChatRequest::for_claim(&self.model, self.temperature, query);
        let body = retry::with_retry(&self.policy, |attempt| {
            tracing::debug!(attempt, model = %self.model, "sending chat request");
            self.transport.send(&request)
        })
        .await?;
        let result = parse::parse_completion(&body)?;
        tracing::info!(verdict = %result.verdict, score = result.score, "model verdict received");
        Ok(result)
    }
}
