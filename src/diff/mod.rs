//! Reconciliation of a current path set against a snapshot path set.
//!
//! Identity is exact string equality of absolute paths:
//! - A path in both sets is unchanged, whatever happened to its content
//! - A renamed file shows up as one removal and one addition
//! - Nothing is hashed and nothing is matched fuzzily

/// Line-oriented rendering of a diff result
pub mod report;

pub use report::{ReportConfig, write_report};

use crate::inventory::PathSet;

/// Paths that appeared or disappeared since a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Present now, absent from the snapshot.
    pub added: PathSet,
    /// Present in the snapshot, absent now.
    pub removed: PathSet,
}

impl DiffResult {
    /// Whether nothing was added or removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Total number of changed paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len()
    }
}

/// Compare `current` against `snapshot`.
///
/// `removed = snapshot − current` and `added = current − snapshot`, so the
/// two result sets are always disjoint.
#[must_use]
pub fn compare(current: &PathSet, snapshot: &PathSet) -> DiffResult {
    DiffResult {
        added: current.difference(snapshot).cloned().collect(),
        removed: snapshot.difference(current).cloned().collect(),
    }
}
