//! Filesystem-backed materialization of a [`DirectorySpec`].
//!
//! All operations are idempotent: existing directories are left untouched,
//! marker files and root files are only written when absent, and only the
//! per-directory `description.txt` is ever overwritten.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{
    AppError, DESCRIPTION_FILE, DirectorySpec, EntryKind, ScaffoldReport, SpecEntry,
};

/// Whether a materialized path was created by this run or already there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Created,
    Existing,
}

/// Filesystem-based project store rooted at the project directory.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    project_dir: PathBuf,
}

impl FilesystemProjectStore {
    /// Create a store for the given project directory.
    pub fn new(project_dir: PathBuf) -> Self {
        Self { project_dir }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn exists(&self) -> bool {
        self.project_dir.exists()
    }

    fn resolve(&self, relative: &str) -> PathBuf {
        self.project_dir.join(relative)
    }

    /// Create the project root itself.
    pub fn create_root(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.project_dir)?;
        Ok(())
    }

    /// Materialize every spec entry, collecting per-path failures into the
    /// report instead of aborting. The report gains one path per entry, in
    /// spec order.
    pub fn materialize(&self, spec: &DirectorySpec, report: &mut ScaffoldReport) {
        for entry in spec.entries() {
            let path = self.resolve(&entry.path);
            match self.apply_entry(entry, &path) {
                Ok(EntryStatus::Created) => report.created.push(path),
                Ok(EntryStatus::Existing) => report.existing.push(path),
                Err(err) => report.failed.push((path, err.to_string())),
            }
        }
    }

    fn apply_entry(&self, entry: &SpecEntry, path: &Path) -> io::Result<EntryStatus> {
        match entry.kind {
            EntryKind::Directory => {
                let existed = path.is_dir();
                fs::create_dir_all(path)?;
                let description = format!("# {}\n\n{}\n", entry.path, entry.description);
                fs::write(path.join(DESCRIPTION_FILE), description)?;
                Ok(if existed { EntryStatus::Existing } else { EntryStatus::Created })
            }
            EntryKind::File => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                if path.exists() {
                    return Ok(EntryStatus::Existing);
                }
                let content = format!("# {}\n\n{}\n", entry.path, entry.description);
                fs::write(path, content)?;
                Ok(EntryStatus::Created)
            }
        }
    }

    /// Write a root-level file unconditionally, reporting whether it was
    /// already present.
    pub fn write_file(&self, relative: &str, content: &str) -> Result<EntryStatus, AppError> {
        let path = self.resolve(relative);
        let existed = path.exists();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(if existed { EntryStatus::Existing } else { EntryStatus::Created })
    }

    /// Write a root-level file unless it already exists.
    pub fn write_file_if_absent(
        &self,
        relative: &str,
        content: &str,
    ) -> Result<EntryStatus, AppError> {
        let path = self.resolve(relative);
        if path.exists() {
            return Ok(EntryStatus::Existing);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(EntryStatus::Created)
    }

    /// Mark a generated script as executable. No-op outside unix.
    pub fn set_executable(&self, relative: &str) -> Result<(), AppError> {
        let full_path = self.resolve(relative);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&full_path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&full_path, perms)?;
        }
        #[cfg(not(unix))]
        let _ = full_path;
        Ok(())
    }
}
