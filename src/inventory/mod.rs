//! Directory inventories.
//!
//! An [`Inventory`] is the result of one scan: the scanned root and an ordered
//! list of [`FileRecord`]s. Everything else (the path set used for diffing,
//! per-type statistics) is derived from the records on demand.
//!
//! # Usage
//!
//! ```no_run
//! use dirsnap::inventory::scan;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let inventory = scan(Path::new("/home/user/Pictures"))?;
//! let stats = inventory.statistics();
//! println!("{} files, {} images", stats.total_files, stats.images);
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod record;
pub mod scanner;

pub use classify::{Category, Statistics, classify};
pub use record::{FileRecord, ImageAttributes};
pub use scanner::{ScanOptions, Scanner, scan};

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Set of absolute path strings, the unit of comparison between inventories
/// and snapshots.
pub type PathSet = BTreeSet<String>;

/// Records of one scan of one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    root: PathBuf,
    records: Vec<FileRecord>,
}

impl Inventory {
    /// Creates an inventory from already built records.
    #[must_use]
    pub const fn new(root: PathBuf, records: Vec<FileRecord>) -> Self {
        Self { root, records }
    }

    /// The scanned directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Records in scan order.
    #[must_use]
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the scan found no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Absolute paths of all records.
    #[must_use]
    pub fn paths(&self) -> PathSet {
        self.records.iter().map(FileRecord::path_key).collect()
    }

    /// Records whose content type is `image/*`.
    pub fn images(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter().filter(|r| r.is_image())
    }

    /// Per-type counts over all records.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics::collect(&self.records)
    }
}
