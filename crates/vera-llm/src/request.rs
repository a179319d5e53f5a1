//! Chat-completion request payload.

use serde::Serialize;
use vera_core::ClaimQuery;

/// Fixed instruction sent as the system message of every request.
pub const SYSTEM_INSTRUCTION: &str = "You are a medical fact-checking assistant. \
Assess the health claim provided by the user against established scientific and \
clinical evidence. Respond with a single JSON object and nothing else, using exactly \
these fields: \
\"verdict\": one of \"TRUE\", \"FALSE\", \"MISLEADING\", \"UNCERTAIN\"; \
\"score\": an integer from 0 to 100 giving your confidence that the claim is accurate; \
\"explanation\": two to four sentences written for a general audience; \
\"citations\": an array of short references to reputable sources (health agencies, \
peer-reviewed studies). Do not invent sources.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Output constraint understood by OpenAI-compatible endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ResponseFormat {
    #[must_use]
    pub const fn json_object() -> Self {
        Self {
            kind: "json_object",
        }
    }
}

/// Body of one chat-completion POST.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub response_format: ResponseFormat,
    pub temperature: f64,
}

impl ChatRequest {
    /// Build the request for `query` with the fixed system instruction.
    #[must_use]
    pub fn for_claim(model: &str, temperature: f64, query: &ClaimQuery) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: format!("Claim: {query}"),
                },
            ],
            response_format: ResponseFormat::json_object(),
            temperature,
        }
    }
}
