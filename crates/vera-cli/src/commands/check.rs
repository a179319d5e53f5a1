use std::time::Instant;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use vera_config::VeraConfig;
use vera_core::ClaimQuery;
use vera_llm::LlmClient;
use vera_pipeline::{AnalysisReport, AnalysisState, Analyzer, cancel_pair, run_isolated};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{CheckArgs, join_claim};
use crate::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct CheckResponse<'a> {
    #[serde(flatten)]
    report: &'a AnalysisReport,
    checked_at: DateTime<Utc>,
    elapsed_ms: u64,
}

/// Handle `vera check`.
pub async fn handle(
    args: &CheckArgs,
    config: &VeraConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let query = ClaimQuery::new(join_claim(&args.claim)).context("invalid claim")?;

    let client =
        LlmClient::from_config(config, args.offline).context("failed to build chat client")?;
    tracing::debug!(remote = client.is_enabled(), model = %config.llm.model, "chat client ready");
    if !args.offline
        && !flags.quiet
        && let Err(error) = config.llm.require()
    {
        eprintln!("vera: {error}; using the offline fallback");
    }

    let mut pipeline = config.pipeline.clone();
    if args.no_stages {
        pipeline.enable_stages = false;
    }
    let analyzer = Analyzer::new(client, pipeline);

    let (cancel, signal) = cancel_pair();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let progress = Progress::spinner("Submitting claim");
    let follower = progress.clone();
    let checked_at = Utc::now();
    let started = Instant::now();

    let report = run_isolated(
        analyzer,
        query,
        move |state: &AnalysisState| follower.follow(state),
        signal,
    )
    .await;

    ctrl_c.abort();
    progress.finish_clear();

    let response = CheckResponse {
        report: &report,
        checked_at,
        elapsed_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
    };
    output::output_report(&report, &response, flags.format)
}
