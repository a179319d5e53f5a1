//! Verdict categories and the assessment result shared by every producer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

/// Highest allowed confidence score.
pub const MAX_SCORE: u8 = 100;

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Categorical outcome of a claim assessment.
///
/// Serialized upper case. Lower and title case spellings are accepted on
/// input since models do not reliably follow the requested casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Verdict {
    #[serde(rename = "TRUE", alias = "true", alias = "True")]
    True,
    #[serde(rename = "FALSE", alias = "false", alias = "False")]
    False,
    #[serde(rename = "MISLEADING", alias = "misleading", alias = "Misleading")]
    Misleading,
    #[serde(rename = "UNCERTAIN", alias = "uncertain", alias = "Uncertain")]
    Uncertain,
    #[serde(rename = "ERROR", alias = "error", alias = "Error")]
    Error,
}

impl Verdict {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Misleading => "MISLEADING",
            Self::Uncertain => "UNCERTAIN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ResultSource
// ---------------------------------------------------------------------------

/// Which path produced a resolved result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    /// Parsed from the remote model's response.
    Remote,
    /// Canned result from the offline fallback responder.
    Fallback,
    /// Synthesized from an error that survived both paths.
    Error,
}

impl ResultSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Fallback => "fallback",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ResultSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VerdictResult
// ---------------------------------------------------------------------------

/// Assessment of a single claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VerdictResult {
    pub verdict: Verdict,
    /// Confidence score, `0..=100`.
    pub score: u8,
    pub explanation: String,
    #[serde(default)]
    pub citations: Vec<String>,
}

impl VerdictResult {
    /// Result shown when an error survives both the transport and the fallback.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Error,
            score: 0,
            explanation: message.into(),
            citations: Vec::new(),
        }
    }

    /// Check invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the score exceeds [`MAX_SCORE`].
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.score > MAX_SCORE {
            return Err(CoreError::Validation(format!(
                "score {} is outside 0..={MAX_SCORE}",
                self.score
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn verdict_serializes_upper_case() {
        let json = serde_json::to_string(&Verdict::Misleading).unwrap();
        assert_eq!(json, "\"MISLEADING\"");
    }

    #[test]
    fn verdict_accepts_lower_and_title_case() {
        let lower: Verdict = serde_json::from_str("\"false\"").unwrap();
        let title: Verdict = serde_json::from_str("\"Uncertain\"").unwrap();
        assert_eq!(lower, Verdict::False);
        assert_eq!(title, Verdict::Uncertain);
    }

    #[test]
    fn verdict_rejects_unknown_label() {
        let result: Result<Verdict, _> = serde_json::from_str("\"MAYBE\"");
        assert!(result.is_err());
    }

    #[test]
    fn citations_default_to_empty() {
        let result: VerdictResult =
            serde_json::from_str(r#"{"verdict":"TRUE","score":90,"explanation":"ok"}"#).unwrap();
        assert!(result.citations.is_empty());
    }

    #[test]
    fn error_result_has_zero_score() {
        let result = VerdictResult::error("connection reset");
        assert_eq!(
            result,
            VerdictResult {
                verdict: Verdict::Error,
                score: 0,
                explanation: "connection reset".into(),
                citations: vec![],
            }
        );
    }

    #[test]
    fn validate_rejects_score_above_100() {
        let mut result = VerdictResult::error("x");
        result.score = 101;
        assert!(matches!(result.validate(), Err(CoreError::Validation(_))));
        result.score = 100;
        assert!(result.validate().is_ok());
    }

    #[test]
    fn negative_score_fails_to_deserialize() {
        let result: Result<VerdictResult, _> =
            serde_json::from_str(r#"{"verdict":"TRUE","score":-3,"explanation":"ok"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn result_source_display() {
        assert_eq!(ResultSource::Fallback.to_string(), "fallback");
    }
}
