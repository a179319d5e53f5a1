//! Drives one analysis cycle through the state reducer.

use std::time::Duration;

use serde::Serialize;
use vera_config::PipelineConfig;
use vera_core::{ClaimQuery, CoreError, ResultSource, VerdictResult};
use vera_llm::{ChatTransport, LlmClient, LlmError};

use crate::cancel::CancelSignal;
use crate::fallback;
use crate::state::{AnalysisEvent, AnalysisState, Stage};

/// Explanation of the ERROR verdict produced by a user abort.
pub const CANCELLED_MESSAGE: &str = "analysis cancelled";

/// Receives every state the analyzer moves into.
pub trait StateObserver {
    fn on_state(&mut self, state: &AnalysisState);
}

impl<F: FnMut(&AnalysisState)> StateObserver for F {
    fn on_state(&mut self, state: &AnalysisState) {
        self(state);
    }
}

/// Final outcome of a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub query: ClaimQuery,
    pub source: ResultSource,
    #[serde(flatten)]
    pub result: VerdictResult,
}

impl AnalysisReport {
    /// Report for an error that survived both the transport and the fallback.
    #[must_use]
    pub fn errored(query: ClaimQuery, message: impl Into<String>) -> Self {
        Self {
            query,
            source: ResultSource::Error,
            result: VerdictResult::error(message),
        }
    }

    fn from_state(state: &AnalysisState) -> Option<Self> {
        let source = match state {
            AnalysisState::Resolved { source, .. } => *source,
            AnalysisState::Errored { .. } => ResultSource::Error,
            _ => return None,
        };
        Some(Self {
            query: state.query()?.clone(),
            source,
            result: state.result()?.clone(),
        })
    }
}

pub struct Analyzer<T> {
    client: LlmClient<T>,
    pipeline: PipelineConfig,
    state: AnalysisState,
}

impl<T: ChatTransport> Analyzer<T> {
    #[must_use]
    pub fn new(client: LlmClient<T>, pipeline: PipelineConfig) -> Self {
        Self {
            client,
            pipeline,
            state: AnalysisState::Idle,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// Run one full cycle for `query`.
    ///
    /// Transport failures are replaced by the fallback responder. A
    /// cancellation ends the cycle in the errored state with an ERROR verdict.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Busy`] if a cycle is already in flight.
    pub async fn run(
        &mut self,
        query: ClaimQuery,
        observer: &mut impl StateObserver,
        mut cancel: CancelSignal,
    ) -> Result<AnalysisReport, CoreError> {
        self.dispatch(AnalysisEvent::Submit(query.clone()), observer)?;

        let driven = tokio::select! {
            biased;
            () = cancel.cancelled() => None,
            outcome = self.drive(&query, &mut *observer) => Some(outcome),
        };

        let terminal = match driven {
            Some(Ok((result, source))) => AnalysisEvent::Resolved { result, source },
            Some(Err(error)) => AnalysisEvent::Failed(error.to_string()),
            None => {
                tracing::info!("analysis cancelled by user");
                AnalysisEvent::Failed(CANCELLED_MESSAGE.into())
            }
        };
        self.dispatch(terminal, observer)?;

        AnalysisReport::from_state(&self.state).ok_or_else(|| CoreError::InvalidTransition {
            from: self.state.name().into(),
            event: "report".into(),
        })
    }

    async fn drive(
        &mut self,
        query: &ClaimQuery,
        observer: &mut impl StateObserver,
    ) -> Result<(VerdictResult, ResultSource), CoreError> {
        for stage in Stage::ALL {
            if stage != Stage::ParseClaim {
                self.dispatch(AnalysisEvent::StageEntered(stage), observer)?;
            }
            if self.pipeline.enable_stages {
                tokio::time::sleep(self.stage_delay(stage)).await;
            }
        }

        self.dispatch(AnalysisEvent::TransportStarted, observer)?;
        match self.client.analyze(query).await {
            Ok(result) => Ok((result, ResultSource::Remote)),
            Err(LlmError::Disabled) => {
                tracing::info!("transport disabled, using offline fallback");
                Ok((fallback::respond(query), ResultSource::Fallback))
            }
            Err(error) => {
                tracing::warn!(%error, "remote analysis failed, using offline fallback");
                Ok((fallback::respond(query), ResultSource::Fallback))
            }
        }
    }

    fn stage_delay(&self, stage: Stage) -> Duration {
        let millis = self
            .pipeline
            .stage_delays_ms
            .get(stage.index())
            .copied()
            .unwrap_or(0);
        Duration::from_millis(millis)
    }

    fn dispatch(
        &mut self,
        event: AnalysisEvent,
        observer: &mut impl StateObserver,
    ) -> Result<(), CoreError> {
        let next = self.state.apply(event)?;
        tracing::debug!(from = self.state.name(), to = next.name(), "analysis state change");
        observer.on_state(&next);
        self.state = next;
        Ok(())
    }
}

/// Run a cycle on its own task so that a panic inside it becomes an ERROR
/// report instead of tearing down the caller.
pub async fn run_isolated<T, O>(
    mut analyzer: Analyzer<T>,
    query: ClaimQuery,
    mut observer: O,
    cancel: CancelSignal,
) -> AnalysisReport
where
    T: ChatTransport + Send + Sync + 'static,
    O: StateObserver + Send + 'static,
{
    let task_query = query.clone();
    let joined = tokio::spawn(async move {
        analyzer.run(task_query, &mut observer, cancel).await
    })
    .await;

    match joined {
        Ok(Ok(report)) => report,
        Ok(Err(error)) => {
            tracing::error!(%error, "analysis failed");
            AnalysisReport::errored(query, error.to_string())
        }
        Err(join_error) => {
            tracing::error!(%join_error, "analysis task aborted");
            AnalysisReport::errored(query, join_error.to_string())
        }
    }
}
