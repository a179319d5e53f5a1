//! Analysis cycle state and its reducer.
//!
//! ```text
//! idle ─submit→ staging(parse) → staging(ocr) → staging(rag) → staging(cross-check)
//!                                                                   │
//!                                              awaiting_transport ←─┘
//!                                                │
//!                                     resolved ←─┴─→ errored
//! ```
//!
//! `failed` is accepted from any in-flight state. `submit` is accepted from
//! idle and from either terminal state, and rejected with
//! [`CoreError::Busy`] while a cycle is in flight.

use serde::Serialize;
use std::fmt;
use vera_core::{ClaimQuery, CoreError, ResultSource, VerdictResult};

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// Cosmetic pipeline stage walked before the transport call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ParseClaim,
    ScanDocuments,
    RetrieveEvidence,
    CrossCheck,
}

impl Stage {
    pub const ALL: [Self; 4] = [
        Self::ParseClaim,
        Self::ScanDocuments,
        Self::RetrieveEvidence,
        Self::CrossCheck,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::ParseClaim => 0,
            Self::ScanDocuments => 1,
            Self::RetrieveEvidence => 2,
            Self::CrossCheck => 3,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ParseClaim => "Parsing claim",
            Self::ScanDocuments => "Scanning documents (OCR)",
            Self::RetrieveEvidence => "Retrieving evidence (RAG)",
            Self::CrossCheck => "Cross-checking sources",
        }
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::ParseClaim => Some(Self::ScanDocuments),
            Self::ScanDocuments => Some(Self::RetrieveEvidence),
            Self::RetrieveEvidence => Some(Self::CrossCheck),
            Self::CrossCheck => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisEvent {
    Submit(ClaimQuery),
    StageEntered(Stage),
    TransportStarted,
    Resolved {
        result: VerdictResult,
        source: ResultSource,
    },
    Failed(String),
}

impl AnalysisEvent {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Submit(_) => "submit",
            Self::StageEntered(_) => "stage_entered",
            Self::TransportStarted => "transport_started",
            Self::Resolved { .. } => "resolved",
            Self::Failed(_) => "failed",
        }
    }
}

// ---------------------------------------------------------------------------
// AnalysisState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AnalysisState {
    #[default]
    Idle,
    Staging {
        query: ClaimQuery,
        stage: Stage,
    },
    AwaitingTransport {
        query: ClaimQuery,
    },
    Resolved {
        query: ClaimQuery,
        result: VerdictResult,
        source: ResultSource,
    },
    Errored {
        query: ClaimQuery,
        result: VerdictResult,
    },
}

impl AnalysisState {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Staging { .. } => "staging",
            Self::AwaitingTransport { .. } => "awaiting_transport",
            Self::Resolved { .. } => "resolved",
            Self::Errored { .. } => "errored",
        }
    }

    /// True while a cycle is in flight; new submissions are refused.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::Staging { .. } | Self::AwaitingTransport { .. })
    }

    /// Result to display, present only in terminal states.
    #[must_use]
    pub const fn result(&self) -> Option<&VerdictResult> {
        match self {
            Self::Resolved { result, .. } | Self::Errored { result, .. } => Some(result),
            _ => None,
        }
    }

    /// Query of the current or last cycle.
    #[must_use]
    pub const fn query(&self) -> Option<&ClaimQuery> {
        match self {
            Self::Idle => None,
            Self::Staging { query, .. }
            | Self::AwaitingTransport { query }
            | Self::Resolved { query, .. }
            | Self::Errored { query, .. } => Some(query),
        }
    }

    /// Compute the state that follows `event`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Busy`] for a submit while in flight, and
    /// [`CoreError::InvalidTransition`] for any other event the current state
    /// does not accept.
    pub fn apply(&self, event: AnalysisEvent) -> Result<Self, CoreError> {
        match (self, event) {
            (state, AnalysisEvent::Submit(_)) if state.is_busy() => Err(CoreError::Busy),
            (_, AnalysisEvent::Submit(query)) => Ok(Self::Staging {
                query,
                stage: Stage::ParseClaim,
            }),
            (Self::Staging { query, stage }, AnalysisEvent::StageEntered(entered))
                if stage.next() == Some(entered) =>
            {
                Ok(Self::Staging {
                    query: query.clone(),
                    stage: entered,
                })
            }
            (
                Self::Staging {
                    query,
                    stage: Stage::CrossCheck,
                },
                AnalysisEvent::TransportStarted,
            ) => Ok(Self::AwaitingTransport {
                query: query.clone(),
            }),
            (Self::AwaitingTransport { query }, AnalysisEvent::Resolved { result, source }) => {
                Ok(Self::Resolved {
                    query: query.clone(),
                    result,
                    source,
                })
            }
            (state, AnalysisEvent::Failed(message)) if state.is_busy() => {
                let query = state.query().cloned().ok_or_else(|| CoreError::InvalidTransition {
                    from: state.name().into(),
                    event: "failed".into(),
                })?;
                Ok(Self::Errored {
                    query,
                    result: VerdictResult::error(message),
                })
            }
            (state, event) => Err(CoreError::InvalidTransition {
                from: state.name().into(),
                event: event.name().into(),
            }),
        }
    }
}
