//! Shared testing utilities for gametree CLI tests.

use std::fs;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `gametree` binary within
    /// the default workspace.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `gametree` binary within a
    /// custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("gametree").expect("Failed to locate gametree binary");
        cmd.current_dir(dir.as_ref());
        cmd
    }

    /// Path of a generated project below the work directory.
    pub fn project_path(&self, dir_name: &str) -> PathBuf {
        self.work_dir.join(dir_name)
    }

    /// Assert a generated directory exists and carries its description file.
    pub fn assert_catalog_dir(&self, project: &str, relative: &str) {
        let dir = self.project_path(project).join(relative);
        assert!(dir.is_dir(), "{relative} should exist as a directory");
        assert!(
            dir.join("description.txt").is_file(),
            "{relative} should carry a description.txt"
        );
    }

    /// Assert a path below the project does not exist.
    pub fn assert_absent(&self, project: &str, relative: &str) {
        let path = self.project_path(project).join(relative);
        assert!(!path.exists(), "{relative} should not exist");
    }

    /// Write a file below the work directory with its mtime pushed into the
    /// past.
    pub fn write_aged_file(&self, relative: &str, age_secs: u64) -> PathBuf {
        let path = self.work_dir.join(relative);
        fs::create_dir_all(path.parent().expect("aged file needs a parent"))
            .expect("Failed to create parent directories");
        fs::write(&path, b"stale test data").expect("Failed to write aged file");

        let file = OpenOptions::new().write(true).open(&path).expect("Failed to reopen aged file");
        file.set_modified(SystemTime::now() - Duration::from_secs(age_secs))
            .expect("Failed to set mtime");
        path
    }

    /// Snapshot of every file below a directory, for before/after diffing.
    pub fn file_set(&self, relative: &str) -> Vec<PathBuf> {
        let mut files = Vec::new();
        collect_files(&self.work_dir.join(relative), &mut files);
        files.sort();
        files
    }
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, files);
        } else {
            files.push(path);
        }
    }
}

#[allow(dead_code)]
pub const DAY_SECS: u64 = 86_400;
