use std::path::PathBuf;

use clap::Args;

use crate::app::commands::create::{self, CreateOptions};
use crate::domain::{
    AppError, EngineVariant, ScaffoldReport, display_platform_list, parse_platform_list,
};

use super::{examples, wizard};

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Name of the game
    #[arg(long, value_name = "NAME")]
    pub game_name: Option<String>,

    /// Root directory where the project structure is created
    #[arg(long, value_name = "DIR")]
    pub root_dir: Option<PathBuf>,

    /// Game engine (Custom, Unity, Unreal, Godot)
    #[arg(long, value_name = "ENGINE")]
    pub engine: Option<String>,

    /// Comma-separated target platforms (e.g. Windows,Android,iOS)
    #[arg(long, value_name = "LIST")]
    pub platforms: Option<String>,

    /// Show usage examples and exit
    #[arg(long)]
    pub examples: bool,
}

impl CreateArgs {
    fn is_interactive(&self) -> bool {
        self.game_name.is_none()
            && self.root_dir.is_none()
            && self.engine.is_none()
            && self.platforms.is_none()
    }
}

pub fn run_create(args: CreateArgs) -> Result<(), AppError> {
    if args.examples {
        examples::print_examples();
        return Ok(());
    }

    let Some(options) = resolve_options(args)? else {
        // Wizard cancelled; nothing was written.
        return Ok(());
    };

    let report = create::execute(&options)?;
    print_report(&options, &report);
    Ok(())
}

fn resolve_options(args: CreateArgs) -> Result<Option<CreateOptions>, AppError> {
    if args.is_interactive() {
        return wizard::run_create_wizard();
    }

    let game_name = args.game_name.ok_or(AppError::InvalidProjectName)?;
    let root_dir = args.root_dir.unwrap_or_else(|| PathBuf::from("."));
    let engine = match args.engine {
        Some(name) => EngineVariant::parse(&name)?,
        None => EngineVariant::Custom,
    };
    let platforms = match args.platforms {
        Some(list) => parse_platform_list(&list)?,
        None => Vec::new(),
    };

    Ok(Some(CreateOptions { game_name, root_dir, engine, platforms }))
}

fn print_report(options: &CreateOptions, report: &ScaffoldReport) {
    for path in &report.created {
        println!("Created: {}", path.display());
    }
    for (path, reason) in &report.failed {
        eprintln!("⚠️  Failed: {} ({})", path.display(), reason);
    }

    if report.is_partial() {
        println!(
            "⚠️  Created project structure for {} at {} with {} failure(s)",
            options.game_name.trim(),
            report.project_dir.display(),
            report.failed.len()
        );
    } else {
        println!(
            "✅ Created project structure for {} at {}",
            options.game_name.trim(),
            report.project_dir.display()
        );
    }
    println!(
        "   {} created, {} already existed, {} failed",
        report.created.len(),
        report.existing.len(),
        report.failed.len()
    );
    println!("   Engine: {}", options.engine);
    println!("   Target Platforms: {}", display_platform_list(&options.platforms));
}
