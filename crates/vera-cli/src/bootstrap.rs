use std::path::PathBuf;

use anyhow::Context;
use vera_config::VeraConfig;

use crate::cli::GlobalFlags;

/// Resolve `--project` to a directory, if given.
pub fn project_root(flags: &GlobalFlags) -> anyhow::Result<Option<PathBuf>> {
    let Some(project) = &flags.project else {
        return Ok(None);
    };
    let path = PathBuf::from(project);
    if !path.is_dir() {
        anyhow::bail!("invalid --project '{}': directory does not exist", path.display());
    }
    Ok(Some(path))
}

/// Load `.env` plus layered configuration for the selected project.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<VeraConfig> {
    let root = project_root(flags)?;
    let config = VeraConfig::load_with_dotenv(root.as_deref())
        .context("failed to load vera configuration")?;
    tracing::debug!(
        endpoint = %config.llm.endpoint,
        model = %config.llm.model,
        configured = config.llm.is_configured(),
        "configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ColorMode, OutputFormat};

    fn flags(project: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            color: ColorMode::Never,
            quiet: false,
            project: project.map(String::from),
        }
    }

    #[test]
    fn missing_project_flag_means_cwd() {
        assert!(project_root(&flags(None)).unwrap().is_none());
    }

    #[test]
    fn nonexistent_project_is_rejected() {
        let err = project_root(&flags(Some("/definitely/not/here"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
