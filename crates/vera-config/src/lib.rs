//! # vera-config
//!
//! Layered configuration loading for Vera using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VERA_*` prefix, `__` as separator)
//! 2. Project-level `.vera/config.toml`
//! 3. User-level `~/.config/vera/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VERA_LLM__API_KEY` -> `llm.api_key`,
//! `VERA_RETRY__MAX_ATTEMPTS` -> `retry.max_attempts`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use vera_config::VeraConfig;
//!
//! let config = VeraConfig::load_with_dotenv(None).expect("config");
//! if config.llm.is_configured() {
//!     println!("model: {}", config.llm.model);
//! }
//! ```

mod error;
mod llm;
mod pipeline;
mod retry;

pub use error::ConfigError;
pub use llm::LlmConfig;
pub use pipeline::{PipelineConfig, STAGE_COUNT};
pub use retry::RetryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the project-local config file.
pub const PROJECT_DIR: &str = ".vera";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VeraConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl VeraConfig {
    /// Load configuration from TOML files and environment variables, then
    /// validate it.
    ///
    /// `project_root` selects where `.vera/config.toml` is looked up; `None`
    /// means the current directory. Does NOT read `.env`; see
    /// [`Self::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction or validation fails.
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the project root (or current directory) first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction or validation fails.
    pub fn load_with_dotenv(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_dotenv(project_root);
        Self::load(project_root)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment(project_root: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("VERA_").split("__"))
    }

    /// Cross-section validation run after extraction.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.retry.validate()?;
        self.pipeline.validate()?;
        Ok(())
    }

    /// Copy safe to print.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            llm: self.llm.redacted(),
            ..self.clone()
        }
    }

    fn project_config_path(project_root: Option<&Path>) -> PathBuf {
        project_root
            .map_or_else(PathBuf::new, Path::to_path_buf)
            .join(PROJECT_DIR)
            .join("config.toml")
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vera").join("config.toml"))
    }

    /// Silently does nothing if no `.env` is found.
    fn load_dotenv(project_root: Option<&Path>) {
        if let Some(root) = project_root {
            let env_path = root.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
        }
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = VeraConfig::default();
        assert!(!config.llm.is_configured());
        assert_eq!(config.retry.max_attempts, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn project_config_path_honours_root() {
        let path = VeraConfig::project_config_path(Some(Path::new("/tmp/demo")));
        assert_eq!(path, PathBuf::from("/tmp/demo/.vera/config.toml"));
        let path = VeraConfig::project_config_path(None);
        assert_eq!(path, PathBuf::from(".vera/config.toml"));
    }

    #[test]
    fn redacted_masks_key_only() {
        let mut config = VeraConfig::default();
        config.llm.api_key = "sk-0123456789".into();
        let shown = config.redacted();
        assert_eq!(shown.llm.api_key, "****6789");
        assert_eq!(shown.llm.model, config.llm.model);
    }
}
