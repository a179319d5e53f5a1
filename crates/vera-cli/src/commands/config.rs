use vera_config::VeraConfig;

use crate::cli::GlobalFlags;
use crate::output;

/// Handle `vera config`.
pub fn handle(config: &VeraConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output::output(&config.redacted(), flags.format)
}
