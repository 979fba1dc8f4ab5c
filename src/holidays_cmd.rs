//! Holidays command: list recognized federal holidays in a range.

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::info_span;

use themis_calendar::FederalCalendar;

use crate::cli::HolidaysArgs;
use crate::convert;

/// Run the holiday listing.
pub fn run(args: HolidaysArgs) -> Result<()> {
    let _cmd = info_span!("holidays").entered();

    let from = convert::parse_date(&args.from)?;
    let to = convert::parse_date(&args.to)?;

    let calendar = FederalCalendar::new(from.year(), to.year())
        .context("failed to build holiday calendar")?;
    let observances = calendar
        .holidays_in_range(from, to)
        .context("holiday range query failed")?;

    if observances.is_empty() {
        println!("No federal holidays between {from} and {to}.");
        return Ok(());
    }

    for observance in observances {
        println!(
            "{}  {:<3}  {}",
            observance.date(),
            observance.date().weekday(),
            observance.label()
        );
    }

    Ok(())
}
