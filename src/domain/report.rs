//! Result types returned by the scaffold and sweep operations.
//!
//! Per-path filesystem failures are data here, not errors: both operations
//! keep going and surface what happened in the final report.

use std::path::PathBuf;

use serde::Serialize;

/// Outcome of materializing a [`DirectorySpec`](crate::domain::DirectorySpec).
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    /// Absolute path of the project root.
    pub project_dir: PathBuf,
    /// Paths created by this run, in creation order.
    pub created: Vec<PathBuf>,
    /// Paths that already existed and were left untouched.
    pub existing: Vec<PathBuf>,
    /// Per-path failures with the failure reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl ScaffoldReport {
    pub fn new(project_dir: PathBuf) -> Self {
        ScaffoldReport { project_dir, ..Default::default() }
    }

    /// All created-or-existing paths in creation order.
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.created.iter().chain(self.existing.iter())
    }

    pub fn is_partial(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// One file selected by a sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepRecord {
    pub path: PathBuf,
    /// Age in whole days at scan time.
    pub age_days: i64,
    pub size: u64,
}

/// Outcome of one sweep pass.
#[derive(Debug, Default, Serialize)]
pub struct SweepReport {
    /// Regular files examined.
    pub scanned: usize,
    /// Files older than the threshold, in enumeration order.
    pub selected: Vec<SweepRecord>,
    /// Files actually deleted. Stays 0 in dry-run mode.
    pub deleted: usize,
    /// Per-file failures (stat or unlink) with the failure reason.
    pub failed: Vec<(PathBuf, String)>,
    /// Sum of sizes of deleted files; in dry-run mode, of selected files.
    pub bytes_reclaimed: u64,
    pub dry_run: bool,
}

impl SweepReport {
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }
}

/// Render a byte count the way humans read disk space.
pub fn human_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    const GB: f64 = 1024.0 * 1024.0 * 1024.0;

    let bytes_f = bytes as f64;
    if bytes_f < KB {
        format!("{bytes} bytes")
    } else if bytes_f < MB {
        format!("{:.2} KB", bytes_f / KB)
    } else if bytes_f < GB {
        format!("{:.2} MB", bytes_f / MB)
    } else {
        format!("{:.2} GB", bytes_f / GB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_size_picks_the_right_unit() {
        assert_eq!(human_size(512), "512 bytes");
        assert_eq!(human_size(2048), "2.00 KB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(human_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }

    #[test]
    fn scaffold_report_paths_chains_created_and_existing() {
        let mut report = ScaffoldReport::new(PathBuf::from("/tmp/demo"));
        report.created.push(PathBuf::from("/tmp/demo/Assets"));
        report.existing.push(PathBuf::from("/tmp/demo/tmp"));
        let paths: Vec<_> = report.paths().collect();
        assert_eq!(paths.len(), 2);
        assert!(!report.is_partial());
    }
}
