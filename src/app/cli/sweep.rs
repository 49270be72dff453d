use std::path::PathBuf;

use clap::Args;

use crate::app::commands::sweep;
use crate::domain::{AppError, SweepReport, human_size};
use crate::services::{DEFAULT_AGE_DAYS, SweepOptions};

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Delete files older than this many days
    #[arg(long, default_value_t = DEFAULT_AGE_DAYS, value_name = "DAYS")]
    pub age: u32,

    /// Report what would be deleted without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Project root containing the tmp/ directory
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Comma-separated subdirectories of tmp/ to skip
    #[arg(long, value_name = "LIST", default_value = "Backups")]
    pub exclude: String,

    /// Output format (text or json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SweepFormat {
    Text,
    Json,
}

impl SweepFormat {
    fn from_name(name: &str) -> Result<SweepFormat, AppError> {
        match name.trim().to_lowercase().as_str() {
            "text" => Ok(SweepFormat::Text),
            "json" => Ok(SweepFormat::Json),
            other => {
                Err(AppError::config_error(format!(
                    "Invalid format '{other}': must be text or json"
                )))
            }
        }
    }
}

pub fn run_sweep(args: SweepArgs) -> Result<(), AppError> {
    let format = SweepFormat::from_name(&args.format)?;
    let project_root = args.project_root.unwrap_or_else(|| PathBuf::from("."));

    let exclude: Vec<String> = args
        .exclude
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    let options = SweepOptions { age_days: args.age, dry_run: args.dry_run, exclude };
    let report = sweep::execute(&project_root, &options)?;

    match format {
        SweepFormat::Text => print_text(&report, args.age),
        SweepFormat::Json => print_json(&report)?,
    }
    Ok(())
}

fn print_text(report: &SweepReport, age_days: u32) {
    let verb = if report.dry_run { "Would delete" } else { "Deleted" };
    for record in &report.selected {
        println!("{}: {} ({} days old)", verb, record.path.display(), record.age_days);
    }
    for (path, reason) in &report.failed {
        eprintln!("⚠️  Failed: {} ({})", path.display(), reason);
    }

    println!(
        "Sweep summary (older than {} days): {} scanned, {} selected, {} deleted, {} failed",
        age_days,
        report.scanned,
        report.selected_count(),
        report.deleted,
        report.failed.len()
    );
    if report.dry_run {
        println!("[dry-run] Would free up {} of disk space", human_size(report.bytes_reclaimed));
    } else {
        println!("Freed up {} of disk space", human_size(report.bytes_reclaimed));
    }
}

fn print_json(report: &SweepReport) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| AppError::config_error(format!("Failed to serialize sweep report: {e}")))?;
    println!("{json}");
    Ok(())
}
