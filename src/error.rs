//! Error taxonomy for inventory, snapshot and diff operations.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for inventory and snapshot operations.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors raised by the scanner, the snapshot writer and the snapshot parser.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The directory to scan does not exist or is not a directory.
    #[error("Directory not found or not a directory: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The snapshot file to parse does not exist.
    #[error("Snapshot not found: {}", .0.display())]
    SnapshotNotFound(PathBuf),

    /// Reading a directory or writing a snapshot failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path the failing operation was working on.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// A snapshot could not be fully recovered (strict parsing only).
    #[error("Snapshot {} only partially parsed: {reason}", path.display())]
    PartialParse {
        /// Snapshot path, or `<memory>` for in-memory documents.
        path: PathBuf,
        /// What made the document incomplete.
        reason: String,
    },
}

impl InventoryError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a partial parse error.
    pub fn partial_parse(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::PartialParse {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// True for both kinds of missing input (directory or snapshot).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::DirectoryNotFound(_) | Self::SnapshotNotFound(_))
    }
}
