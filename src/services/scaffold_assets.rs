//! Embedded scaffold content for generated projects.
//!
//! Static assets (gitignore baseline, tmp README, cleanup wrapper script)
//! are embedded verbatim; the project README and root description are
//! minijinja templates rendered with the project profile.

use include_dir::{Dir, include_dir};
use minijinja::Environment;
use serde::Serialize;

use crate::domain::AppError;

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/scaffold");

/// Template context for the rendered root files.
#[derive(Debug, Serialize)]
pub struct ProjectProfile {
    pub game_name: String,
    pub engine: String,
    /// Display list, e.g. `"Windows, Linux"` or `"none"`.
    pub platforms: String,
    /// Creation timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub created: String,
}

fn asset(path: &str) -> Result<&'static str, AppError> {
    SCAFFOLD_DIR
        .get_file(path)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::config_error(format!("Missing embedded asset '{path}'")))
}

/// Baseline `.gitignore` content for generated projects.
pub fn gitignore() -> Result<&'static str, AppError> {
    asset("gitignore")
}

/// Static README for the `tmp/` directory.
pub fn tmp_readme() -> Result<&'static str, AppError> {
    asset("tmp_README.md")
}

/// Cleanup wrapper script placed under `Scripts/Tools`.
pub fn cleanup_script() -> Result<&'static str, AppError> {
    asset("cleanup_tmp.sh")
}

/// Render the project README.
pub fn render_readme(profile: &ProjectProfile) -> Result<String, AppError> {
    render("README.md.j2", profile)
}

/// Render the project-root `description.txt`.
pub fn render_root_description(profile: &ProjectProfile) -> Result<String, AppError> {
    render("root_description.txt.j2", profile)
}

fn render(template_name: &str, profile: &ProjectProfile) -> Result<String, AppError> {
    let source = asset(template_name)?;

    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(template_name, source).map_err(|e| AppError::Render {
        template: template_name.to_string(),
        details: e.to_string(),
    })?;

    let template = env.get_template(template_name).map_err(|e| AppError::Render {
        template: template_name.to_string(),
        details: e.to_string(),
    })?;

    template.render(profile).map_err(|e| AppError::Render {
        template: template_name.to_string(),
        details: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ProjectProfile {
        ProjectProfile {
            game_name: "Space Adventure".to_string(),
            engine: "Unreal".to_string(),
            platforms: "Windows, PlayStation".to_string(),
            created: "2026-01-01 12:00:00".to_string(),
        }
    }

    #[test]
    fn gitignore_covers_build_and_tmp() {
        let content = gitignore().unwrap();
        assert!(content.contains("Build/"));
        assert!(content.contains("tmp/"));
    }

    #[test]
    fn readme_renders_the_profile() {
        let readme = render_readme(&profile()).unwrap();
        assert!(readme.starts_with("# Space Adventure"));
        assert!(readme.contains("Unreal"));
        assert!(readme.contains("Windows, PlayStation"));
    }

    #[test]
    fn root_description_names_engine_and_platforms() {
        let description = render_root_description(&profile()).unwrap();
        assert!(description.contains("Game Engine: Unreal"));
        assert!(description.contains("Target Platforms: Windows, PlayStation"));
    }

    #[test]
    fn cleanup_script_invokes_the_sweeper() {
        let script = cleanup_script().unwrap();
        assert!(script.starts_with("#!/bin/sh"));
        assert!(script.contains("gametree sweep"));
    }
}
