//! CLI adapter.

mod create;
mod examples;
mod sweep;
mod wizard;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "gametree")]
#[command(version)]
#[command(
    about = "Scaffold game-development project trees and sweep stale temporary files",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    create: create::CreateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Delete stale files under the project's tmp/ directory
    #[clap(visible_alias = "s")]
    Sweep(sweep::SweepArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Some(Commands::Sweep(args)) => sweep::run_sweep(args),
        None => create::run_create(cli.create),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
