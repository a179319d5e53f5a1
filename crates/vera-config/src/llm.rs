//! Chat-completion endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default chat-completion endpoint.
fn default_endpoint() -> String {
    String::from("https://api.openai.com/v1/chat/completions")
}

/// Default model identifier.
fn default_model() -> String {
    String::from("gpt-4o-mini")
}

const fn default_temperature() -> f64 {
    0.2
}

/// Per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    /// Full URL of the chat-completion endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier sent in every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Bearer token. Usually supplied via `VERA_LLM__API_KEY` or `.env`.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: String::new(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LlmConfig {
    /// Check if the endpoint can be called at all.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.endpoint.is_empty()
    }

    /// Fail with a hint when the endpoint cannot be called.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if the key or endpoint is empty.
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if self.is_configured() {
            Ok(self)
        } else {
            Err(ConfigError::NotConfigured {
                section: "llm".into(),
                hint: "set VERA_LLM__API_KEY or llm.api_key".into(),
            })
        }
    }

    /// Copy with the API key masked, for display.
    ///
    /// Keys of four characters or fewer are masked entirely.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let len = self.api_key.chars().count();
        let api_key = match len {
            0 => String::new(),
            1..=4 => String::from("****"),
            _ => {
                let tail: String = self.api_key.chars().skip(len - 4).collect();
                format!("****{tail}")
            }
        };
        Self {
            api_key,
            ..self.clone()
        }
    }
}
