use indicatif::{ProgressBar, ProgressStyle};
use vera_pipeline::AnalysisState;

use crate::ui;

/// Spinner on stderr that follows the analysis state. Inert when progress
/// output is disabled.
#[derive(Clone)]
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn set_message(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.to_string());
        }
    }

    /// Update the message for a new analysis state.
    pub fn follow(&self, state: &AnalysisState) {
        if let Some(message) = state_message(state) {
            self.set_message(&message);
        }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

fn state_message(state: &AnalysisState) -> Option<String> {
    match state {
        AnalysisState::Staging { stage, .. } => {
            Some(format!("[{}/4] {}", stage.index() + 1, stage.label()))
        }
        AnalysisState::AwaitingTransport { .. } => Some(String::from("Consulting model")),
        AnalysisState::Idle | AnalysisState::Resolved { .. } | AnalysisState::Errored { .. } => {
            None
        }
    }
}
