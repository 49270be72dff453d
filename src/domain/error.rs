use std::io;

use thiserror::Error;

/// Library-wide error type for gametree operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Project name is empty or whitespace-only.
    #[error("Invalid project name: must not be empty")]
    InvalidProjectName,

    /// Root directory cannot be used as a scaffold target.
    #[error("Root directory '{path}' is unusable: {reason}")]
    RootUnusable { path: String, reason: String },

    /// Engine name is not one of the supported variants.
    #[error("Invalid engine '{name}': must be one of Custom, Unity, Unreal, Godot")]
    InvalidEngine { name: String },

    /// Platform name is not one of the supported targets.
    #[error("Invalid platform '{name}': must be one of {available}")]
    InvalidPlatform { name: String, available: String },

    /// Sweep target directory is missing or not a directory.
    #[error("Cleanup target not found: {0}")]
    SweepTargetNotFound(String),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Embedded template failed to render.
    #[error("Failed to render '{template}': {details}")]
    Render { template: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidProjectName
            | AppError::RootUnusable { .. }
            | AppError::InvalidEngine { .. }
            | AppError::InvalidPlatform { .. } => io::ErrorKind::InvalidInput,
            AppError::SweepTargetNotFound(_) => io::ErrorKind::NotFound,
            AppError::Prompt(_) | AppError::Render { .. } => io::ErrorKind::Other,
        }
    }
}
