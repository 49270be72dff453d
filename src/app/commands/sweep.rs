//! Tmp-directory sweep command.

use std::path::Path;

use crate::domain::{AppError, SweepReport, TMP_DIR};
use crate::services::{SweepOptions, sweep};

/// Execute the sweep command against `<project_root>/tmp`.
pub fn execute(project_root: &Path, options: &SweepOptions) -> Result<SweepReport, AppError> {
    let target = project_root.join(TMP_DIR);
    sweep(&target, options)
}
