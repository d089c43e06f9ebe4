//! Error types for safename-core

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for safename operations.
///
/// Only [`Error::NoWorkingDirectory`] aborts a batch. Problems with a single
/// path are reported as [`Diagnostic`]s next to the partial result instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not get current working directory: {0}")]
    NoWorkingDirectory(#[source] std::io::Error),

    #[error(
        "Incorrect syntax (<<{0}>>) for replacement: please use 'TARGET:REPLACEMENT1,REPLACEMENT2,...'"
    )]
    InvalidSubstitution(String),

    #[error("Invalid truncation length: <<{0}>>")]
    InvalidTruncateLength(String),

    #[error("Unknown character profile <<{0}>>: expected 'fat' or 'portable'")]
    UnknownProfile(String),

    #[error("Unknown strategy <<{0}>>: expected 'remove' or 'represent'")]
    UnknownStrategy(String),

    #[error("Could not read config file {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for safename operations
pub type Result<T> = std::result::Result<T, Error>;

/// A non-fatal problem found while collecting or renaming.
///
/// These are accumulated and handed back to the caller, which decides how to
/// present them. None of them stop the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("File <<{}>> does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("Directory <<{}>> not searchable: {message}", .path.display())]
    UnsearchableDirectory { path: PathBuf, message: String },

    #[error(
        "Path <<{}>> would be renamed to\n  <<{}>>,\nwhich collides with\n  <<{}>>\nSkipping...",
        .path.display(),
        .new_path.display(),
        .taken.display()
    )]
    Collision {
        path: PathBuf,
        new_path: PathBuf,
        taken: PathBuf,
    },

    #[error("Failed to rename <<{}>> to <<{}>>: {message}", .path.display(), .new_path.display())]
    RenameFailed {
        path: PathBuf,
        new_path: PathBuf,
        message: String,
    },
}

impl Diagnostic {
    /// The path this diagnostic is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::MissingFile(path) => path,
            Self::UnsearchableDirectory { path, .. } => path,
            Self::Collision { path, .. } => path,
            Self::RenameFailed { path, .. } => path,
        }
    }
}
