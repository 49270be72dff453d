mod project_filesystem;
mod scaffold_assets;
mod sweeper;

pub use project_filesystem::{EntryStatus, FilesystemProjectStore};
pub use scaffold_assets::{
    ProjectProfile, cleanup_script, gitignore, render_readme, render_root_description, tmp_readme,
};
pub use sweeper::{DEFAULT_AGE_DAYS, SweepOptions, sweep};
