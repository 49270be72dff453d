//! Directory catalog for generated game projects.
//!
//! The catalog is a static table of relative paths with one-line
//! descriptions. A [`DirectorySpec`] is composed from the top-level roots,
//! the base catalog, the engine-specific entries, and one `Build/<Platform>`
//! entry per selected platform, deduplicated in first-occurrence order.

use std::collections::HashSet;
use std::path::{Component, Path};

use crate::domain::{EngineVariant, Platform};

/// File written into every generated directory.
pub const DESCRIPTION_FILE: &str = "description.txt";

/// Temporary-workspace root inside a generated project; the sweep target.
pub const TMP_DIR: &str = "tmp";

/// A static catalog entry: a relative directory path and its description.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub path: &'static str,
    pub description: &'static str,
}

/// Whether a spec entry materializes as a directory or a marker file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// An engine catalog entry. `{game}` in the path is replaced with the
/// project directory name at composition time.
#[derive(Debug, Clone, Copy)]
struct EngineEntry {
    path: &'static str,
    description: &'static str,
    kind: EntryKind,
}

/// One resolved entry of a [`DirectorySpec`].
#[derive(Debug, Clone)]
pub struct SpecEntry {
    /// Path relative to the project root.
    pub path: String,
    /// One-line description written into the entry's `description.txt`.
    pub description: String,
    pub kind: EntryKind,
}

/// Top-level roots, inserted first so creation order is parent-first.
static TOP_LEVEL_CATALOG: [CatalogEntry; 14] = [
    CatalogEntry {
        path: "Pre-Production",
        description: "Contains all pre-production materials including concept, story, design, and planning.",
    },
    CatalogEntry {
        path: "Production",
        description: "Contains all production phase materials including asset creation, animation, and implementation.",
    },
    CatalogEntry {
        path: "Post-Production",
        description: "Contains all post-production materials including compositing, effects, and final polishing.",
    },
    CatalogEntry {
        path: "Documentation",
        description: "Contains all project documentation, including design documents, technical specifications, and API references.",
    },
    CatalogEntry {
        path: "Source",
        description: "Contains all source code for the game, including core systems, gameplay code, and development tools.",
    },
    CatalogEntry {
        path: "Assets",
        description: "Contains all game assets such as models, textures, animations, audio, and other resources.",
    },
    CatalogEntry {
        path: "Build",
        description: "Contains build outputs and distribution packages for the selected target platforms.",
    },
    CatalogEntry {
        path: "Tests",
        description: "Contains all testing code, including unit tests and integration tests.",
    },
    CatalogEntry {
        path: "ThirdParty",
        description: "Contains third-party libraries, tools, and dependencies.",
    },
    CatalogEntry {
        path: "Scripts",
        description: "Contains automation scripts for building, deployment, and development workflows.",
    },
    CatalogEntry {
        path: "Config",
        description: "Contains configuration files for both the game engine and game-specific settings.",
    },
    CatalogEntry {
        path: "Versions",
        description: "Contains or tracks different versions of the game during development.",
    },
    CatalogEntry {
        path: "Releases",
        description: "Contains organized release builds for different distribution channels.",
    },
    CatalogEntry {
        path: "tmp",
        description: "Contains all temporary files, caches, logs, and intermediate build artifacts.",
    },
];

/// The base catalog shared by every project regardless of engine.
static BASE_CATALOG: [CatalogEntry; 77] = [
    // Production pipeline
    CatalogEntry {
        path: "Pre-Production/Idea",
        description: "Contains initial game concept documents and brainstorming materials.",
    },
    CatalogEntry {
        path: "Pre-Production/Story",
        description: "Contains narrative structure, plot outlines, and story development documents.",
    },
    CatalogEntry {
        path: "Pre-Production/Characters",
        description: "Contains character designs, backstories, and development.",
    },
    CatalogEntry {
        path: "Pre-Production/ArtDirection",
        description: "Contains art style guides, mood boards, and visual direction documents.",
    },
    CatalogEntry {
        path: "Pre-Production/Storyboard",
        description: "Contains storyboards for cutscenes and key game moments.",
    },
    CatalogEntry {
        path: "Pre-Production/ProductPlanning",
        description: "Contains project schedules, milestone planning, and production roadmaps.",
    },
    CatalogEntry {
        path: "Pre-Production/Marketing",
        description: "Contains early marketing plans, target audience analysis, and promotional strategy.",
    },
    CatalogEntry {
        path: "Pre-Production/VocalTracks",
        description: "Contains voice acting scripts, audition materials, and placeholder recordings.",
    },
    CatalogEntry {
        path: "Pre-Production/StoryReel",
        description: "Contains animatics and early visualization of game sequences.",
    },
    CatalogEntry {
        path: "Pre-Production/RnD",
        description: "Contains research and development materials for new gameplay features or technologies.",
    },
    CatalogEntry {
        path: "Production/Layout",
        description: "Contains scene layout files and environment blocking.",
    },
    CatalogEntry {
        path: "Production/Modeling",
        description: "Contains 3D modeling files and assets in production.",
    },
    CatalogEntry {
        path: "Production/Texturing",
        description: "Contains texturing work files and materials in development.",
    },
    CatalogEntry {
        path: "Production/Rigging",
        description: "Contains character and object rig files and setups.",
    },
    CatalogEntry {
        path: "Production/Animation",
        description: "Contains animation work in progress and animation systems.",
    },
    CatalogEntry {
        path: "Production/Lighting",
        description: "Contains lighting setups and environment illumination assets.",
    },
    CatalogEntry {
        path: "Production/VFX",
        description: "Contains visual effects work and particle systems in development.",
    },
    CatalogEntry {
        path: "Production/SoundFX",
        description: "Contains sound effects work files and mixing in progress.",
    },
    CatalogEntry {
        path: "Production/Music",
        description: "Contains musical score work and soundtrack development.",
    },
    CatalogEntry {
        path: "Production/Rendering",
        description: "Contains rendering outputs and material previews.",
    },
    CatalogEntry {
        path: "Production/TitleCredits",
        description: "Contains title screen and credits sequence development.",
    },
    CatalogEntry {
        path: "Production/CharSetup",
        description: "Contains character finalization and implementation.",
    },
    CatalogEntry {
        path: "Post-Production/Compositing",
        description: "Contains scene composition work and final visual integration.",
    },
    CatalogEntry {
        path: "Post-Production/2DVFX",
        description: "Contains 2D visual effects and motion graphics elements.",
    },
    CatalogEntry {
        path: "Post-Production/ColorCorrection",
        description: "Contains color grading and final visual polish.",
    },
    CatalogEntry {
        path: "Post-Production/FinalOutput",
        description: "Contains finalized game scenes ready for implementation.",
    },
    // Development structure
    CatalogEntry {
        path: "Documentation/Design",
        description: "Contains game design documents, concept art, and gameplay specifications.",
    },
    CatalogEntry {
        path: "Documentation/Technical",
        description: "Contains technical documentation, architecture diagrams, and implementation details.",
    },
    CatalogEntry {
        path: "Documentation/API",
        description: "Contains API reference documentation for the game's programming interfaces.",
    },
    CatalogEntry {
        path: "Source/Core",
        description: "Contains core game engine systems and fundamental components.",
    },
    CatalogEntry {
        path: "Source/Game",
        description: "Contains game-specific code, gameplay mechanics, and game logic.",
    },
    CatalogEntry {
        path: "Source/Engine",
        description: "Contains engine components, rendering systems, physics, and other subsystems.",
    },
    CatalogEntry {
        path: "Source/Tools",
        description: "Contains development tools and utilities for the game development process.",
    },
    CatalogEntry {
        path: "Source/Tools/BlenderAddons",
        description: "Contains custom Blender add-ons for the game development pipeline.",
    },
    CatalogEntry {
        path: "Assets/Models/Sources",
        description: "Contains original Blender (.blend) model files.",
    },
    CatalogEntry {
        path: "Assets/Models/Exported",
        description: "Contains exported game-ready models in engine-compatible formats.",
    },
    CatalogEntry {
        path: "Assets/Textures",
        description: "Contains texture files, materials, and surface descriptions.",
    },
    CatalogEntry {
        path: "Assets/Animations",
        description: "Contains character and object animations.",
    },
    CatalogEntry {
        path: "Assets/Audio",
        description: "Contains sound effects, music, and voice recordings.",
    },
    CatalogEntry {
        path: "Assets/Shaders",
        description: "Contains shader programs for visual effects and rendering techniques.",
    },
    CatalogEntry {
        path: "Assets/UI",
        description: "Contains user interface assets, icons, and UI-specific graphics.",
    },
    CatalogEntry {
        path: "Assets/3DAnimate",
        description: "Contains 3D animation files and rigs for game characters and objects.",
    },
    // Temporary workspace
    CatalogEntry {
        path: "tmp/Builds",
        description: "Contains temporary build files and intermediate compilation results.",
    },
    CatalogEntry {
        path: "tmp/Cache",
        description: "Contains cached data for faster loading and processing.",
    },
    CatalogEntry {
        path: "tmp/Logs",
        description: "Contains log files generated during development and testing.",
    },
    CatalogEntry {
        path: "tmp/Backups",
        description: "Contains automatic backups of project files.",
    },
    CatalogEntry {
        path: "tmp/Renders",
        description: "Contains temporary rendering outputs and previews.",
    },
    CatalogEntry {
        path: "tmp/Debug",
        description: "Contains debug information and crash dumps.",
    },
    CatalogEntry {
        path: "tmp/Testing",
        description: "Contains temporary files generated during testing.",
    },
    CatalogEntry {
        path: "tmp/Artifacts",
        description: "Contains build artifacts and intermediate files.",
    },
    CatalogEntry {
        path: "tmp/AutoSave",
        description: "Contains auto-saved versions of project files.",
    },
    CatalogEntry {
        path: "tmp/Exports",
        description: "Contains temporary exported files before final placement.",
    },
    CatalogEntry {
        path: "tmp/Media/Images",
        description: "Contains temporary images, screenshots, and visual assets used during development.",
    },
    CatalogEntry {
        path: "tmp/Media/Audio",
        description: "Contains temporary audio files, voice recordings, and sound effects for testing.",
    },
    CatalogEntry {
        path: "tmp/Media/Video",
        description: "Contains temporary video files, cutscenes, and animations for review.",
    },
    CatalogEntry {
        path: "tmp/Media/Textures",
        description: "Contains in-progress and temporary textures before final implementation.",
    },
    CatalogEntry {
        path: "tmp/Prototypes",
        description: "Contains prototype assets and code for experimental features.",
    },
    CatalogEntry {
        path: "tmp/Staging",
        description: "Contains assets staged for review before moving to production assets.",
    },
    CatalogEntry {
        path: "tmp/Review",
        description: "Contains assets under review by team members or clients.",
    },
    CatalogEntry {
        path: "tmp/Processing",
        description: "Contains assets currently being processed or converted.",
    },
    CatalogEntry {
        path: "tmp/Import",
        description: "Contains recently imported assets pending proper organization.",
    },
    CatalogEntry {
        path: "tmp/Outsourced",
        description: "Contains temporary storage for assets from external partners or contractors.",
    },
    // Tests, third party, scripts, config, versioning
    CatalogEntry {
        path: "Tests/Unit",
        description: "Contains unit tests for individual components and systems.",
    },
    CatalogEntry {
        path: "Tests/Integration",
        description: "Contains integration tests for testing how components work together.",
    },
    CatalogEntry {
        path: "ThirdParty/Libraries",
        description: "Contains third-party libraries and dependencies used by the game.",
    },
    CatalogEntry {
        path: "ThirdParty/Tools",
        description: "Contains third-party tools used in the game development process.",
    },
    CatalogEntry {
        path: "Scripts/Build",
        description: "Contains scripts for automating the build process.",
    },
    CatalogEntry {
        path: "Scripts/Deploy",
        description: "Contains scripts for deploying the game to various platforms.",
    },
    CatalogEntry {
        path: "Scripts/Tools",
        description: "Contains utility scripts for development workflow automation.",
    },
    CatalogEntry {
        path: "Scripts/Pipeline",
        description: "Contains scripts for asset pipeline automation, particularly for Blender to game engine exports.",
    },
    CatalogEntry {
        path: "Scripts/CI",
        description: "Contains continuous integration scripts for automated testing, building, and deployment in CI/CD workflows.",
    },
    CatalogEntry {
        path: "Config/Engine",
        description: "Contains configuration files for the game engine.",
    },
    CatalogEntry {
        path: "Config/Game",
        description: "Contains game-specific configuration files.",
    },
    CatalogEntry {
        path: "Versions/Current",
        description: "Contains or links to the current active development version.",
    },
    CatalogEntry {
        path: "Releases/Internal",
        description: "Contains builds for internal testing and development.",
    },
    CatalogEntry {
        path: "Releases/External",
        description: "Contains builds for external testing and beta releases.",
    },
    CatalogEntry {
        path: "Releases/Public",
        description: "Contains public release builds and distribution packages.",
    },
];

static UNITY_CATALOG: [EngineEntry; 8] = [
    EngineEntry {
        path: "Assets/Prefabs",
        description: "Contains reusable Unity prefab objects.",
        kind: EntryKind::Directory,
    },
    EngineEntry {
        path: "Assets/Materials",
        description: "Contains Unity material definitions.",
        kind: EntryKind::Directory,
    },
    EngineEntry {
        path: "Assets/Scenes",
        description: "Contains Unity scene files.",
        kind: EntryKind::Directory,
    },
    EngineEntry {
        path: "Assets/Scripts",
        description: "Contains C# scripts for Unity.",
        kind: EntryKind::Directory,
    },
    EngineEntry {
        path: "Assets/Editor",
        description: "Contains Unity editor extensions and scripts.",
        kind: EntryKind::Directory,
    },
    EngineEntry {
        path: "Assets/Resources",
        description: "Contains assets that need to be accessed via Resources.Load.",
        kind: EntryKind::Directory,
    },
    EngineEntry {
        path: "ProjectSettings",
        description: "Contains Unity project settings.",
        kind: EntryKind::Directory,
    },
    EngineEntry {
        path: "Packages",
        description: "Contains Unity package manager configuration.",
        kind: EntryKind::Directory,
    },
];

static UNREAL_CATALOG: [EngineEntry; 8] = [
    EngineEntry {
        path: "Content/Blueprints",
        description: "Contains Unreal Blueprint assets.",
        kind: EntryKind::Directory,
    },
    EngineEntry {
        path: "Content/Materials",
        description: "Contains Unreal material definitions.",
        kind: EntryKind::Directory,
    },
    EngineEntry {
        path: "Content/Levels",
        description: "Contains Unreal level files.",
        kind: EntryKind::Directory,
    },
    EngineEntry {
        path: "Content/Characters",
        description: "Contains character assets and blueprints.",
        kind: EntryKind::Directory,
    },
    EngineEntry {
        path: "Content/UI",
        description: "Contains UI assets and widgets.",
        kind: EntryKind::Directory,
    },
    EngineEntry {
        path: "Source/{game}",
        description: "Contains C++ code for the game.",
        kind: EntryKind::Directory,
    },
    EngineEntry {
        path: "Config/DefaultEngine.ini",
        description: "Contains engine configuration.",
        kind: EntryKind::File,
    },
    EngineEntry {
        path: "Config/DefaultGame.ini",
        description: "Contains game configuration.",
        kind: EntryKind::File,
    },
];

static GODOT_CATALOG: [EngineEntry; 6] = [
    EngineEntry {
        path: "scenes",
        description: "Contains Godot scene files.",
        kind: EntryKind::Directory,
    },
    EngineEntry {
        path: "scripts",
        description: "Contains GDScript files.",
        kind: EntryKind::Directory,
    },
    EngineEntry {
        path: "assets",
        description: "Contains game assets for Godot.",
        kind: EntryKind::Directory,
    },
    EngineEntry {
        path: "addons",
        description: "Contains Godot addons and plugins.",
        kind: EntryKind::Directory,
    },
    EngineEntry {
        path: "project.godot",
        description: "Godot project configuration file.",
        kind: EntryKind::File,
    },
    EngineEntry {
        path: "export_presets.cfg",
        description: "Godot export configurations.",
        kind: EntryKind::File,
    },
];

fn engine_catalog(engine: EngineVariant) -> &'static [EngineEntry] {
    match engine {
        EngineVariant::Custom => &[],
        EngineVariant::Unity => &UNITY_CATALOG,
        EngineVariant::Unreal => &UNREAL_CATALOG,
        EngineVariant::Godot => &GODOT_CATALOG,
    }
}

/// True when `path` is a usable catalog path: relative, non-empty, and free
/// of parent/root traversal components.
pub fn is_valid_relative_path(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    Path::new(path).components().all(|c| matches!(c, Component::Normal(_)))
}

/// The full, ordered, deduplicated set of entries to materialize for one
/// project.
#[derive(Debug, Clone)]
pub struct DirectorySpec {
    entries: Vec<SpecEntry>,
}

impl DirectorySpec {
    /// Compose the spec for a project.
    ///
    /// `project_dir_name` is the final directory name (spaces already
    /// removed); it substitutes the `{game}` placeholder in engine entries.
    pub fn for_project(
        project_dir_name: &str,
        engine: EngineVariant,
        platforms: &[Platform],
    ) -> DirectorySpec {
        let mut spec = DirectorySpec { entries: Vec::new() };
        let mut seen = HashSet::new();

        for entry in TOP_LEVEL_CATALOG {
            spec.push(&mut seen, entry.path, entry.description, EntryKind::Directory);
        }
        for entry in BASE_CATALOG {
            spec.push(&mut seen, entry.path, entry.description, EntryKind::Directory);
        }
        for entry in engine_catalog(engine) {
            let path = entry.path.replace("{game}", project_dir_name);
            spec.push(&mut seen, &path, entry.description, entry.kind);
        }
        for platform in platforms {
            let path = format!("Build/{}", platform.dir_name());
            let description =
                format!("Contains build outputs and packages for the {platform} platform.");
            spec.push(&mut seen, &path, &description, EntryKind::Directory);
        }

        spec
    }

    fn push(
        &mut self,
        seen: &mut HashSet<String>,
        path: &str,
        description: &str,
        kind: EntryKind,
    ) {
        debug_assert!(is_valid_relative_path(path), "catalog path must be relative: {path}");
        if !is_valid_relative_path(path) || !seen.insert(path.to_string()) {
            return;
        }
        self.entries.push(SpecEntry {
            path: path.to_string(),
            description: description.to_string(),
            kind,
        });
    }

    /// Entries in creation order (parents before children).
    pub fn entries(&self) -> &[SpecEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookup by relative path.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|entry| entry.path == path)
    }
}
