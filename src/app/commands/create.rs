//! Project-tree creation command.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use serde::Serialize;

use crate::domain::{
    AppError, DESCRIPTION_FILE, DirectorySpec, EngineVariant, Platform, ScaffoldReport, TMP_DIR,
    display_platform_list,
};
use crate::services::{
    EntryStatus, FilesystemProjectStore, ProjectProfile, cleanup_script, gitignore, render_readme,
    render_root_description, tmp_readme,
};

/// Relative location of the generated cleanup wrapper script.
pub const CLEANUP_SCRIPT_PATH: &str = "Scripts/Tools/cleanup_tmp.sh";

/// Resolved inputs for one scaffold run.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    pub game_name: String,
    pub root_dir: PathBuf,
    pub engine: EngineVariant,
    pub platforms: Vec<Platform>,
}

/// Contents of the generated `version_info.json`.
#[derive(Debug, Serialize)]
struct VersionInfo<'a> {
    name: &'a str,
    version: &'a str,
    status: &'a str,
    created: String,
    engine: &'a str,
    platforms: Vec<&'a str>,
}

/// Execute the create command.
///
/// Validation failures are fatal and happen before any filesystem mutation;
/// per-path failures during materialization land in the report and never
/// abort the run.
pub fn execute(options: &CreateOptions) -> Result<ScaffoldReport, AppError> {
    let game_name = options.game_name.trim();
    if game_name.is_empty() {
        return Err(AppError::InvalidProjectName);
    }
    let dir_name = game_name.replace(' ', "");

    fs::create_dir_all(&options.root_dir).map_err(|e| AppError::RootUnusable {
        path: options.root_dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let project_dir = options.root_dir.join(&dir_name);
    let store = FilesystemProjectStore::new(project_dir.clone());
    store.create_root()?;

    let spec = DirectorySpec::for_project(&dir_name, options.engine, &options.platforms);
    let mut report = ScaffoldReport::new(project_dir);
    store.materialize(&spec, &mut report);

    write_root_files(&store, options, game_name, &mut report);

    Ok(report)
}

fn write_root_files(
    store: &FilesystemProjectStore,
    options: &CreateOptions,
    game_name: &str,
    report: &mut ScaffoldReport,
) {
    let profile = ProjectProfile {
        game_name: game_name.to_string(),
        engine: options.engine.display_name().to_string(),
        platforms: display_platform_list(&options.platforms),
        created: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    };

    // The root description follows the same always-overwrite policy as the
    // per-directory description files.
    record(report, store, DESCRIPTION_FILE, || {
        let content = render_root_description(&profile)?;
        store.write_file(DESCRIPTION_FILE, &content)
    });

    record(report, store, "README.md", || {
        let content = render_readme(&profile)?;
        store.write_file_if_absent("README.md", &content)
    });

    record(report, store, &format!("{TMP_DIR}/README.md"), || {
        store.write_file_if_absent(&format!("{TMP_DIR}/README.md"), tmp_readme()?)
    });

    record(report, store, ".gitignore", || {
        store.write_file_if_absent(".gitignore", gitignore()?)
    });

    record(report, store, "version_info.json", || {
        let content = version_info_json(options, game_name)?;
        store.write_file_if_absent("version_info.json", &content)
    });

    record(report, store, CLEANUP_SCRIPT_PATH, || {
        let status = store.write_file_if_absent(CLEANUP_SCRIPT_PATH, cleanup_script()?)?;
        store.set_executable(CLEANUP_SCRIPT_PATH)?;
        Ok(status)
    });
}

fn record<F>(
    report: &mut ScaffoldReport,
    store: &FilesystemProjectStore,
    relative: &str,
    write: F,
) where
    F: FnOnce() -> Result<EntryStatus, AppError>,
{
    let path = store.project_dir().join(relative);
    match write() {
        Ok(EntryStatus::Created) => report.created.push(path),
        Ok(EntryStatus::Existing) => report.existing.push(path),
        Err(err) => report.failed.push((path, err.to_string())),
    }
}

fn version_info_json(options: &CreateOptions, game_name: &str) -> Result<String, AppError> {
    let info = VersionInfo {
        name: game_name,
        version: "0.1.0",
        status: "development",
        created: Local::now().to_rfc3339(),
        engine: options.engine.display_name(),
        platforms: options.platforms.iter().map(|p| p.dir_name()).collect(),
    };
    let json = serde_json::to_string_pretty(&info)
        .map_err(|e| AppError::config_error(format!("Failed to serialize version info: {e}")))?;
    Ok(format!("{json}\n"))
}
