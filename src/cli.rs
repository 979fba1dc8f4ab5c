use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Themis public-meeting notice deadline calculator.
#[derive(Parser)]
#[command(
    name = "themis",
    version,
    about = "Public-meeting notice deadline calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the notice deadline for a single meeting.
    Compute(ComputeArgs),
    /// Compute deadlines for a CSV batch of meetings.
    Batch(BatchArgs),
    /// List recognized federal holidays in a date range.
    Holidays(HolidaysArgs),
}

/// Arguments for the `compute` subcommand.
#[derive(clap::Args)]
pub struct ComputeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Meeting type: town-council or planning-and-zoning.
    #[arg(short = 't', long)]
    pub meeting_type: String,

    /// Meeting date (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: String,

    /// Override required business days from config.
    #[arg(long)]
    pub required_days: Option<u32>,

    /// Override publication buffer days from config.
    #[arg(long)]
    pub buffer_days: Option<u32>,

    /// Reference date for status classification (defaults to the local date).
    #[arg(long)]
    pub today: Option<String>,
}

/// Arguments for the `batch` subcommand.
#[derive(clap::Args)]
pub struct BatchArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to input CSV with meeting_type and meeting_date columns.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the exported notice table CSV.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Reference date for status classification (defaults to the local date).
    #[arg(long)]
    pub today: Option<String>,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Range start date (YYYY-MM-DD).
    #[arg(long)]
    pub from: String,

    /// Range end date (YYYY-MM-DD), inclusive.
    #[arg(long)]
    pub to: String,
}
