//! Staged-delay settings for the analysis cycle.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Number of cosmetic stages walked before the transport call.
pub const STAGE_COUNT: usize = 4;

fn default_stage_delays_ms() -> Vec<u64> {
    vec![600, 900, 900, 600]
}

const fn default_enable_stages() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Pause per stage, in order. Must hold exactly [`STAGE_COUNT`] entries.
    #[serde(default = "default_stage_delays_ms")]
    pub stage_delays_ms: Vec<u64>,

    /// When false the stages are still reported but not waited on.
    #[serde(default = "default_enable_stages")]
    pub enable_stages: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stage_delays_ms: default_stage_delays_ms(),
            enable_stages: default_enable_stages(),
        }
    }
}

impl PipelineConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the delay list has the wrong length.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stage_delays_ms.len() != STAGE_COUNT {
            return Err(ConfigError::InvalidValue {
                field: "pipeline.stage_delays_ms".into(),
                reason: format!(
                    "expected {STAGE_COUNT} entries, got {}",
                    self.stage_delays_ms.len()
                ),
            });
        }
        Ok(())
    }
}
