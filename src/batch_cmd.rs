//! Batch command: deadlines for a CSV of meetings, with optional export.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use themis_deadline::compute_batch;
use themis_io::{export_notice_csv, read_batch_csv};

use crate::cli::BatchArgs;
use crate::config::ThemisConfig;
use crate::convert;

/// Run the batch pipeline.
pub fn run(args: BatchArgs) -> Result<()> {
    let _cmd = info_span!("batch").entered();

    // 1. Load config and batch input
    let config = ThemisConfig::load(args.config.as_deref())?;
    let today = convert::resolve_today(args.today.as_deref())?;
    let policy = convert::build_policy(&config.policy, None, None)?;

    let records = read_batch_csv(&args.input)
        .with_context(|| format!("failed to read batch input: {}", args.input.display()))?;
    info!(n_meetings = records.len(), "batch input loaded");

    // 2. Build the holiday table spanning every meeting
    let meeting_dates: Vec<_> = records.iter().map(|r| r.meeting_date()).collect();
    let calendar = convert::build_calendar(&config.calendar, today, &meeting_dates)?;

    // 3. Compute in entry order
    let results = compute_batch(&records, &policy, &calendar, today)
        .context("batch computation failed")?;

    // 4. Render table
    println!(
        "{:<26}  {:<12}  {:<12}  {:<12}  {}",
        "meeting_type", "meeting_date", "deadline", "send_by", "status"
    );
    for result in &results {
        println!(
            "{:<26}  {:<12}  {:<12}  {:<12}  {}",
            result.record().meeting_type(),
            result.record().meeting_date(),
            result.deadline_date(),
            result.recommended_send_date(),
            result.status()
        );
    }

    // 5. Optional export artifact
    if let Some(output) = args.output {
        export_notice_csv(&output, &results)
            .with_context(|| format!("failed to write notice table: {}", output.display()))?;
        info!(path = %output.display(), "notice table exported");
    }

    Ok(())
}
