//! Single-level directory scanner.
//!
//! The `Scanner` lists the immediate children of a directory and probes each
//! regular file into a [`FileRecord`]. Subdirectories are neither descended
//! into nor recorded.

use super::{FileRecord, Inventory, classify};
use crate::error::{InventoryError, InventoryResult};
use crate::probe::{DimensionProbe, FsMetadataProbe, ImageDimensionProbe, MetadataProbe};
use std::path::{Path, PathBuf};
use tracing::{Level, debug, span};
use walkdir::WalkDir;

/// Options controlling a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Whether symbolic links to files are recorded as files
    pub follow_symlinks: bool,
    /// Whether image records get their pixel dimensions probed
    pub probe_dimensions: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            probe_dimensions: true,
        }
    }
}

/// Builds inventories of one directory level
pub struct Scanner {
    /// Scan options
    options: ScanOptions,
    /// Size, mtime and content type source
    metadata: Box<dyn MetadataProbe>,
    /// Pixel dimension source, consulted only when enabled in `options`
    dimensions: Box<dyn DimensionProbe>,
}

impl Scanner {
    /// Create a scanner backed by the filesystem and `image` probes
    #[must_use]
    pub fn new(options: ScanOptions) -> Self {
        Self::with_probes(
            options,
            Box::new(FsMetadataProbe),
            Box::new(ImageDimensionProbe),
        )
    }

    /// Create a scanner with explicit probes
    #[must_use]
    pub fn with_probes(
        options: ScanOptions,
        metadata: Box<dyn MetadataProbe>,
        dimensions: Box<dyn DimensionProbe>,
    ) -> Self {
        Self {
            options,
            metadata,
            dimensions,
        }
    }

    /// Scan the immediate children of `root`
    ///
    /// Relative roots are made absolute against the current directory, so
    /// every record's path is absolute.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `root` does not exist or is not a directory
    /// - The directory or one of its entries cannot be read
    pub fn scan(&self, root: &Path) -> InventoryResult<Inventory> {
        let _span = span!(Level::DEBUG, "scan", root = %root.display()).entered();

        if !root.is_dir() {
            return Err(InventoryError::DirectoryNotFound(root.to_path_buf()));
        }
        let abs_root = absolute(root)?;

        let dimensions = self
            .options
            .probe_dimensions
            .then_some(self.dimensions.as_ref());

        let mut records = Vec::new();
        for entry in WalkDir::new(&abs_root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.options.follow_symlinks)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().map_or_else(|| abs_root.clone(), Path::to_path_buf);
                InventoryError::io(&path, e.into())
            })?;

            if !entry.file_type().is_file() {
                debug!(path = %entry.path().display(), "skipping non-file entry");
                continue;
            }

            let record = FileRecord::probe(entry.path(), self.metadata.as_ref(), dimensions)
                .map_err(|e| InventoryError::io(entry.path(), e))?;
            debug!(name = record.name(), category = %classify(&record), "recorded");
            records.push(record);
        }

        debug!(files = records.len(), "scan complete");
        Ok(Inventory::new(abs_root, records))
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ScanOptions::default())
    }
}

/// Scan `root` with default options and probes
///
/// # Errors
///
/// See [`Scanner::scan`].
pub fn scan(root: &Path) -> InventoryResult<Inventory> {
    Scanner::default().scan(root)
}

fn absolute(path: &Path) -> InventoryResult<PathBuf> {
    std::path::absolute(path).map_err(|e| InventoryError::io(path, e))
}
