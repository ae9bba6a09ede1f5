//! Error types for graph construction.
//!
//! Only root validation aborts a build. Unreadable entries and unresolvable
//! imports degrade to fewer nodes/edges and are logged where they occur.

use std::path::PathBuf;
use thiserror::Error;

/// A failure that aborts graph construction.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The requested root directory does not exist.
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// The requested root exists but is not a directory.
    #[error("path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Unexpected filesystem failure while validating the root.
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}
