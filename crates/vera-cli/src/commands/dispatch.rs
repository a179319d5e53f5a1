use vera_config::VeraConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &VeraConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Check(args) => commands::check::handle(&args, config, flags).await,
        Commands::Fallback(args) => commands::fallback::handle(&args, flags),
        Commands::Config => commands::config::handle(config, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
