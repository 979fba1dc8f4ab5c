//! Compute command: deadline for a single meeting.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use themis_deadline::{classify, compute_deadline, compute_recommended_send, Status};

use crate::cli::ComputeArgs;
use crate::config::ThemisConfig;
use crate::convert;

/// Run the single-meeting computation.
pub fn run(args: ComputeArgs) -> Result<()> {
    let _cmd = info_span!("compute").entered();

    // 1. Load config and resolve inputs
    let config = ThemisConfig::load(args.config.as_deref())?;
    let meeting_type = convert::parse_meeting_type(&args.meeting_type)?;
    let meeting_date = convert::parse_date(&args.date)?;
    let today = convert::resolve_today(args.today.as_deref())?;
    let policy = convert::build_policy(&config.policy, args.required_days, args.buffer_days)?;

    // 2. Build the holiday table spanning today and the meeting
    let calendar = convert::build_calendar(&config.calendar, today, &[meeting_date])?;
    info!(
        start_year = calendar.start_year(),
        end_year = calendar.end_year(),
        "holiday calendar ready"
    );

    // 3. Walk back and classify
    let deadline_date = compute_deadline(&calendar, meeting_date, policy.required_business_days())
        .with_context(|| format!("failed to compute deadline for {meeting_date}"))?;
    let recommended_send_date =
        compute_recommended_send(deadline_date, policy.publication_buffer_days());
    let status = classify(today, deadline_date, recommended_send_date);
    info!(%deadline_date, %recommended_send_date, status = %status, "deadline computed");

    // 4. Render
    println!("Meeting type:            {meeting_type}");
    println!("Meeting date:            {}", meeting_date.format("%A, %B %d, %Y"));
    println!("Last day to send notice: {}", deadline_date.format("%A, %B %d, %Y"));
    println!("Recommended send date:   {}", recommended_send_date.format("%A, %B %d, %Y"));
    println!("Status:                  [{}] {}", status, status_message(status));

    Ok(())
}

/// Advisory line matching the status badge.
fn status_message(status: Status) -> &'static str {
    match status {
        Status::Safe => "Within the safe timeframe to send the notice.",
        Status::Buffer => "Within the publication window. Send the notice as soon as possible.",
        Status::Missed => "The deadline has passed. The notice may not be published in time.",
    }
}
