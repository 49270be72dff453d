//! gametree: scaffold game-development project trees and sweep stale
//! temporary files.
//!
//! Two independent, stateless operations share one binary:
//!
//! - [`scaffold`] composes a [`DirectorySpec`](domain::DirectorySpec) from a
//!   base catalog plus engine- and platform-specific extensions and
//!   materializes it on disk, idempotently.
//! - [`sweep_project`] deletes (or, in dry-run mode, reports) files under a
//!   project's `tmp/` directory that are strictly older than an age
//!   threshold.

pub mod app;
pub mod domain;
pub mod services;

use std::path::Path;

pub use app::commands::create::CreateOptions;
pub use domain::{AppError, EngineVariant, Platform, ScaffoldReport, SweepReport};
pub use services::{DEFAULT_AGE_DAYS, SweepOptions};

/// Scaffold a project tree under `options.root_dir`.
///
/// Validation failures are fatal and occur before any filesystem mutation;
/// per-path failures are collected into the returned report. Re-running on
/// an existing tree re-creates only missing paths and never touches user
/// files.
pub fn scaffold(options: &CreateOptions) -> Result<ScaffoldReport, AppError> {
    app::commands::create::execute(options)
}

/// Sweep `<project_root>/tmp`, deleting regular files strictly older than
/// `options.age_days`.
///
/// Fails only when the target directory is missing; per-file failures are
/// reported, never raised.
pub fn sweep_project(project_root: &Path, options: &SweepOptions) -> Result<SweepReport, AppError> {
    app::commands::sweep::execute(project_root, options)
}
