//! User-submitted claim text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A health claim submitted for assessment.
///
/// The only validation is that the text is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClaimQuery(String);

impl ClaimQuery {
    /// Build a query from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the text is empty or whitespace.
    pub fn new(text: impl Into<String>) -> Result<Self, CoreError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation("claim text must not be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased copy used for keyword matching.
    #[must_use]
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl TryFrom<String> for ClaimQuery {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClaimQuery> for String {
    fn from(value: ClaimQuery) -> Self {
        value.0
    }
}

impl AsRef<str> for ClaimQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(matches!(ClaimQuery::new(""), Err(CoreError::Validation(_))));
        assert!(matches!(
            ClaimQuery::new("  \n\t "),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let query = ClaimQuery::new("  Garlic cures colds \n").unwrap();
        assert_eq!(query.as_str(), "Garlic cures colds");
    }

    #[test]
    fn normalized_is_lowercase() {
        let query = ClaimQuery::new("Vaccines Cause AUTISM").unwrap();
        assert_eq!(query.normalized(), "vaccines cause autism");
    }

    #[test]
    fn deserialize_rejects_empty_string() {
        let result: Result<ClaimQuery, _> = serde_json::from_str("\"   \"");
        assert!(result.is_err());
    }
}
