use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Check a health claim with the model, falling back offline on failure.
    Check(CheckArgs),
    /// Show what the offline fallback responder says about a claim.
    Fallback(FallbackArgs),
    /// Print the effective configuration (API key redacted).
    Config,
    /// Print the JSON Schema of the verdict object.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Claim text. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub claim: Vec<String>,

    /// Skip the network and answer from the offline fallback.
    #[arg(long)]
    pub offline: bool,

    /// Do not wait on the staged pipeline delays.
    #[arg(long)]
    pub no_stages: bool,
}

#[derive(Clone, Debug, Args)]
pub struct FallbackArgs {
    /// Claim text. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub claim: Vec<String>,
}

/// Join positional words into a single claim string.
#[must_use]
pub fn join_claim(words: &[String]) -> String {
    words.join(" ")
}
