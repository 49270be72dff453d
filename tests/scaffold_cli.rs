mod common;

use std::fs;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn create_builds_base_engine_and_platform_directories() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--game-name", "Demo", "--engine", "Unity", "--platforms", "Windows,Android"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Created project structure for Demo"));

    // Base catalog
    ctx.assert_catalog_dir("Demo", "Pre-Production/Idea");
    ctx.assert_catalog_dir("Demo", "Production/Animation");
    ctx.assert_catalog_dir("Demo", "Post-Production/Compositing");
    ctx.assert_catalog_dir("Demo", "Source/Core");
    ctx.assert_catalog_dir("Demo", "tmp/Cache");
    ctx.assert_catalog_dir("Demo", "Scripts/Tools");

    // Engine- and platform-specific entries
    ctx.assert_catalog_dir("Demo", "Assets/Prefabs");
    ctx.assert_catalog_dir("Demo", "Build/Windows");
    ctx.assert_catalog_dir("Demo", "Build/Android");

    // Unreal-only and unselected-platform paths stay absent
    ctx.assert_absent("Demo", "Content/Blueprints");
    ctx.assert_absent("Demo", "Build/Linux");
}

#[test]
fn create_writes_root_files() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--game-name", "Demo", "--platforms", "Windows"])
        .assert()
        .success();

    let project = ctx.project_path("Demo");
    let gitignore = fs::read_to_string(project.join(".gitignore")).unwrap();
    assert!(gitignore.contains("Build/"));
    assert!(gitignore.contains("tmp/"));

    let readme = fs::read_to_string(project.join("README.md")).unwrap();
    assert!(readme.starts_with("# Demo"));

    let description = fs::read_to_string(project.join("description.txt")).unwrap();
    assert!(description.contains("Game Engine: Custom"));
    assert!(description.contains("Target Platforms: Windows"));

    let version_info: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(project.join("version_info.json")).unwrap())
            .unwrap();
    assert_eq!(version_info["name"], "Demo");
    assert_eq!(version_info["platforms"][0], "Windows");

    assert!(project.join("Scripts/Tools/cleanup_tmp.sh").is_file());
    assert!(project.join("tmp/README.md").is_file());
}

#[test]
fn project_dir_name_strips_spaces_from_the_game_name() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--game-name", "Space Adventure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SpaceAdventure"));

    assert!(ctx.project_path("SpaceAdventure").is_dir());
}

#[test]
fn godot_engine_adds_marker_files() {
    let ctx = TestContext::new();

    ctx.cli().args(["--game-name", "Demo", "--engine", "godot"]).assert().success();

    let project = ctx.project_path("Demo");
    assert!(project.join("project.godot").is_file());
    assert!(project.join("export_presets.cfg").is_file());
    ctx.assert_catalog_dir("Demo", "scenes");
    ctx.assert_catalog_dir("Demo", "addons");
}

#[test]
fn unreal_engine_substitutes_the_project_name() {
    let ctx = TestContext::new();

    ctx.cli().args(["--game-name", "Space Adventure", "--engine", "Unreal"]).assert().success();

    ctx.assert_catalog_dir("SpaceAdventure", "Source/SpaceAdventure");
    assert!(ctx.project_path("SpaceAdventure").join("Config/DefaultEngine.ini").is_file());
}

#[test]
fn rerun_succeeds_and_preserves_user_files() {
    let ctx = TestContext::new();
    let args = ["--game-name", "Demo", "--engine", "Unity", "--platforms", "Windows"];

    ctx.cli().args(args).assert().success();

    let user_file = ctx.project_path("Demo").join("Assets/Prefabs/player.prefab");
    fs::write(&user_file, b"user content").unwrap();

    ctx.cli()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 created"))
        .stdout(predicate::str::contains("0 failed"));

    assert_eq!(fs::read(&user_file).unwrap(), b"user content");
}

#[test]
fn examples_flag_prints_usage_and_writes_nothing() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--examples")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage Examples"));

    assert!(fs::read_dir(ctx.work_dir()).unwrap().next().is_none());
}

#[test]
fn missing_game_name_in_flag_mode_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--engine", "Unity"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project name"));

    assert!(fs::read_dir(ctx.work_dir()).unwrap().next().is_none());
}

#[test]
fn unknown_engine_is_rejected_before_any_write() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--game-name", "Demo", "--engine", "CryEngine"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid engine 'CryEngine'"));

    assert!(fs::read_dir(ctx.work_dir()).unwrap().next().is_none());
}

#[test]
fn unknown_platform_is_rejected_before_any_write() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--game-name", "Demo", "--platforms", "Windows,Amiga"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid platform 'Amiga'"));

    assert!(fs::read_dir(ctx.work_dir()).unwrap().next().is_none());
}

#[test]
fn root_dir_flag_relocates_the_project() {
    let ctx = TestContext::new();
    let elsewhere = ctx.work_dir().join("nested/projects");

    ctx.cli()
        .args(["--game-name", "Demo", "--root-dir"])
        .arg(&elsewhere)
        .assert()
        .success();

    assert!(elsewhere.join("Demo/Assets").is_dir());
}
