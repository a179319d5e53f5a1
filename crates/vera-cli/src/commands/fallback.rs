use anyhow::Context;
use vera_core::{ClaimQuery, ResultSource};
use vera_pipeline::{AnalysisReport, fallback};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{FallbackArgs, join_claim};
use crate::output;

/// Handle `vera fallback`.
pub fn handle(args: &FallbackArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = ClaimQuery::new(join_claim(&args.claim)).context("invalid claim")?;
    let report = AnalysisReport {
        result: fallback::respond(&query),
        source: ResultSource::Fallback,
        query,
    };
    output::output_report(&report, &report, flags.format)
}
