//! Network seam between [`crate::LlmClient`] and the chat endpoint.

use std::future::Future;
use std::time::Duration;

use vera_config::LlmConfig;

use crate::error::LlmError;
use crate::http::check_response;
use crate::request::ChatRequest;

/// Sends one chat-completion request and returns the raw response body.
///
/// One call is one attempt; retrying is the caller's job.
pub trait ChatTransport {
    fn send(&self, request: &ChatRequest) -> impl Future<Output = Result<String, LlmError>> + Send;
}

/// reqwest-backed transport with bearer authorization.
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns [`LlmError::Disabled`] if the config has no key or endpoint,
    /// or [`LlmError::Http`] if the client cannot be built.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        if let Err(error) = config.require() {
            tracing::debug!(%error, "chat endpoint unavailable");
            return Err(LlmError::Disabled);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("vera/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Authorized POST of `request` to the configured endpoint.
    fn build(&self, request: &ChatRequest) -> reqwest::RequestBuilder {
        self.http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
    }
}

impl ChatTransport for HttpTransport {
    async fn send(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let resp = self.build(request).send().await?;
        let resp = check_response(resp).await?;
        Ok(resp.text().await?)
    }
}

/// Transport chosen at runtime: the real endpoint or none at all.
pub enum Transport {
    Http(HttpTransport),
    /// Every send fails immediately with [`LlmError::Disabled`].
    Disabled,
}

impl Transport {
    /// Pick the HTTP transport when the config allows it and `offline` is false.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the reqwest client cannot be built.
    pub fn from_config(config: &LlmConfig, offline: bool) -> Result<Self, LlmError> {
        if offline {
            tracing::debug!("offline mode, transport disabled");
            return Ok(Self::Disabled);
        }
        match HttpTransport::new(config) {
            Ok(http) => Ok(Self::Http(http)),
            Err(LlmError::Disabled) => {
                tracing::info!("no API key configured, transport disabled");
                Ok(Self::Disabled)
            }
            Err(error) => Err(error),
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

impl ChatTransport for Transport {
    async fn send(&self, request: &ChatRequest) -> Result<String, LlmError> {
        match self {
            Self::Http(http) => http.send(request).await,
            Self::Disabled => Err(LlmError::Disabled),
        }
    }
}
