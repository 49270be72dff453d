//! Age-based sweep of a project's temporary directory.
//!
//! One stateless pass: enumerate regular files under the target, select
//! those strictly older than the cutoff, delete (or report in dry-run
//! mode). Directories are never deleted, even when emptied, and a per-file
//! failure never aborts the sweep.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};

use crate::domain::{AppError, SweepRecord, SweepReport};

/// Files older than this many days are deleted when no age is given.
pub const DEFAULT_AGE_DAYS: u32 = 7;

/// Options for one sweep pass.
#[derive(Debug, Clone)]
pub struct SweepOptions {
    /// Delete files strictly older than this many days.
    pub age_days: u32,
    /// Report selections without deleting.
    pub dry_run: bool,
    /// Subtrees (relative to the target root) skipped entirely.
    pub exclude: Vec<String>,
}

impl Default for SweepOptions {
    fn default() -> Self {
        SweepOptions {
            age_days: DEFAULT_AGE_DAYS,
            dry_run: false,
            exclude: vec!["Backups".to_string()],
        }
    }
}

/// Run one sweep pass over `target_root`.
///
/// Fails only when the target is missing or not a directory; everything
/// else is reported per-file in the returned [`SweepReport`].
pub fn sweep(target_root: &Path, options: &SweepOptions) -> Result<SweepReport, AppError> {
    sweep_at(target_root, options, Utc::now())
}

fn sweep_at(
    target_root: &Path,
    options: &SweepOptions,
    now: DateTime<Utc>,
) -> Result<SweepReport, AppError> {
    if !target_root.is_dir() {
        return Err(AppError::SweepTargetNotFound(target_root.display().to_string()));
    }

    let cutoff = now - Duration::days(i64::from(options.age_days));
    let mut report = SweepReport { dry_run: options.dry_run, ..Default::default() };
    sweep_dir(target_root, target_root, cutoff, now, options, &mut report);
    Ok(report)
}

fn is_excluded(root: &Path, dir: &Path, exclude: &[String]) -> bool {
    let Ok(relative) = dir.strip_prefix(root) else {
        return false;
    };
    // Normalize separators so exclude entries can always use '/'.
    let relative = relative.to_string_lossy().replace('\\', "/");
    exclude.iter().any(|excluded| {
        relative == *excluded || relative.starts_with(&format!("{excluded}/"))
    })
}

fn sweep_dir(
    root: &Path,
    dir: &Path,
    cutoff: DateTime<Utc>,
    now: DateTime<Utc>,
    options: &SweepOptions,
    report: &mut SweepReport,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            report.failed.push((dir.to_path_buf(), err.to_string()));
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                report.failed.push((dir.to_path_buf(), err.to_string()));
                continue;
            }
        };
        let path = entry.path();

        // symlink_metadata: never follow links out of the target tree.
        let metadata = match fs::symlink_metadata(&path) {
            Ok(metadata) => metadata,
            Err(err) => {
                report.failed.push((path, err.to_string()));
                continue;
            }
        };

        if metadata.is_dir() {
            if !is_excluded(root, &path, &options.exclude) {
                sweep_dir(root, &path, cutoff, now, options, report);
            }
            continue;
        }
        if !metadata.is_file() {
            continue;
        }

        report.scanned += 1;
        let modified = match metadata.modified() {
            Ok(modified) => DateTime::<Utc>::from(modified),
            Err(err) => {
                report.failed.push((path, err.to_string()));
                continue;
            }
        };

        // Strict inequality: a file exactly at the threshold is kept.
        if modified >= cutoff {
            continue;
        }

        let size = metadata.len();
        let record = SweepRecord {
            path: path.clone(),
            age_days: (now - modified).num_days(),
            size,
        };
        report.selected.push(record);

        if options.dry_run {
            report.bytes_reclaimed += size;
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => {
                report.deleted += 1;
                report.bytes_reclaimed += size;
            }
            Err(err) => report.failed.push((path, err.to_string())),
        }
    }
}
