use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `vera` binary.
#[derive(Debug, Parser)]
#[command(name = "vera", version, about = "Vera - health claim checker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Color in table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root holding `.vera/config.toml` and `.env` (defaults to cwd)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, ColorMode, Commands, OutputFormat};
    use crate::cli::root_commands::join_claim;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn claim_words_are_collected() {
        let cli = Cli::try_parse_from(["vera", "check", "Garlic", "cures", "colds"])
            .expect("cli should parse");
        let Commands::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(join_claim(&args.claim), "Garlic cures colds");
        assert!(!args.offline);
        assert!(!args.no_stages);
    }

    #[test]
    fn check_flags_parse() {
        let cli = Cli::try_parse_from([
            "vera",
            "check",
            "--offline",
            "--no-stages",
            "Vaccines cause autism",
        ])
        .expect("cli should parse");
        let Commands::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert!(args.offline);
        assert!(args.no_stages);
        assert_eq!(args.claim, vec!["Vaccines cause autism".to_string()]);
    }

    #[test]
    fn check_requires_a_claim() {
        assert!(Cli::try_parse_from(["vera", "check"]).is_err());
        assert!(Cli::try_parse_from(["vera", "fallback"]).is_err());
    }

    #[test]
    fn global_flags_parse_before_and_after_subcommand() {
        let before = Cli::try_parse_from(["vera", "--format", "json", "--verbose", "config"])
            .expect("cli should parse");
        assert_eq!(before.format, OutputFormat::Json);
        assert!(before.verbose);

        let after = Cli::try_parse_from(["vera", "schema", "--format", "raw", "--quiet"])
            .expect("cli should parse");
        assert_eq!(after.format, OutputFormat::Raw);
        assert!(after.quiet);
        assert!(matches!(after.command, Commands::Schema));
    }

    #[test]
    fn defaults_are_table_and_auto_color() {
        let cli = Cli::try_parse_from(["vera", "config"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.color, ColorMode::Auto);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["vera", "--format", "xml", "config"]).is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["vera", "--project", "/tmp/demo", "--color", "never", "config"])
            .expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.project.as_deref(), Some("/tmp/demo"));
        assert_eq!(flags.color, ColorMode::Never);
    }
}
