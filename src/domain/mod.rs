pub mod catalog;
pub mod engine;
pub mod error;
pub mod platform;
pub mod report;

pub use catalog::{
    CatalogEntry, DESCRIPTION_FILE, DirectorySpec, EntryKind, SpecEntry, TMP_DIR,
    is_valid_relative_path,
};
pub use engine::EngineVariant;
pub use error::AppError;
pub use platform::{Platform, display_platform_list, parse_platform_list};
pub use report::{ScaffoldReport, SweepRecord, SweepReport, human_size};
