//! Human-readable snapshot documents.
//!
//! A snapshot is a plain text file with a summary header followed by a
//! details section holding one labeled block per file:
//!
//! ```text
//! Snapshot du répertoire : /photos
//! Nombre total de fichiers : 1
//! Nombre de fichiers image : 1
//! Nombre d'images PNG : 1
//! Nombre d'images JPEG : 0
//! Nombre d'images WEBP : 0
//! Version du format : 1
//!
//! Détails des fichiers :
//! Nom : a.png
//! Chemin : /photos/a.png
//! Taille : 1024 octets
//! Dernière modification : 2026-10-19 14:03:22
//! Type MIME : image/png
//! Dimensions : 640 x 480
//! ```
//!
//! Only the `Chemin :` lines carry data the diff needs. Everything else is
//! for people reading the file. Documents without a `Version du format` line
//! are legacy snapshots and are read the same way.

pub mod parser;
pub mod writer;

pub use parser::{Leniency, ParsedSnapshot, SnapshotParser, parse};
pub use writer::{render, snapshot_file_name, write};

use crate::error::{InventoryError, InventoryResult};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// Version written by this crate.
pub const FORMAT_VERSION: u32 = 1;

/// File name prefix of generated snapshots.
pub const FILE_PREFIX: &str = "snapshot_";

/// File name extension of generated snapshots.
pub const FILE_EXTENSION: &str = "txt";

/// Header labels.
pub mod labels {
    /// Scanned directory.
    pub const ROOT: &str = "Snapshot du répertoire :";
    /// Total file count.
    pub const TOTAL: &str = "Nombre total de fichiers :";
    /// Image count.
    pub const IMAGES: &str = "Nombre de fichiers image :";
    /// PNG count.
    pub const PNG: &str = "Nombre d'images PNG :";
    /// JPEG count.
    pub const JPEG: &str = "Nombre d'images JPEG :";
    /// WEBP count.
    pub const WEBP: &str = "Nombre d'images WEBP :";
    /// Format version.
    pub const VERSION: &str = "Version du format :";
    /// Start of the details section (matched as a prefix).
    pub const DETAILS: &str = "Détails des fichiers";

    /// File name.
    pub const NAME: &str = "Nom :";
    /// Absolute path, the only field the diff consumes.
    pub const PATH: &str = "Chemin :";
    /// Size in bytes.
    pub const SIZE: &str = "Taille :";
    /// Last modification time.
    pub const MODIFIED: &str = "Dernière modification :";
    /// Content type.
    pub const MIME: &str = "Type MIME :";
    /// Pixel dimensions.
    pub const DIMENSIONS: &str = "Dimensions :";

    /// Every label a details block may contain.
    pub const FIELDS: [&str; 6] = [NAME, PATH, SIZE, MODIFIED, MIME, DIMENSIONS];
}

/// Writes control characters of a name or path as `\u{..}` escapes.
///
/// Keeps every field on a single line of the document.
#[must_use]
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if !value.chars().any(char::is_control) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        if ch.is_control() {
            escaped.extend(ch.escape_unicode());
        } else {
            escaped.push(ch);
        }
    }
    Cow::Owned(escaped)
}

/// Reverses [`escape_field`].
///
/// Only escapes that denote a control character are decoded; any other
/// `\u{..}` text is kept as written.
#[must_use]
pub fn unescape_field(value: &str) -> Cow<'_, str> {
    const OPEN: &str = "\\u{";

    if !value.contains(OPEN) {
        return Cow::Borrowed(value);
    }
    let mut decoded = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(at) = rest.find(OPEN) {
        decoded.push_str(&rest[..at]);
        let tail = &rest[at + OPEN.len()..];
        let control = tail.find('}').and_then(|end| {
            let digits = &tail[..end];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            let ch = u32::from_str_radix(digits, 16)
                .ok()
                .and_then(char::from_u32)?;
            ch.is_control().then_some((ch, end))
        });
        match control {
            Some((ch, end)) => {
                decoded.push(ch);
                rest = &tail[end + 1..];
            }
            None => {
                decoded.push_str(OPEN);
                rest = tail;
            }
        }
    }
    decoded.push_str(rest);
    Cow::Owned(decoded)
}

/// Most recent snapshot in `dir`, by the timestamp embedded in its name.
///
/// Returns `Ok(None)` when the directory does not exist or holds no
/// snapshot files.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be read.
pub fn latest_in(dir: &Path) -> InventoryResult<Option<PathBuf>> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let mut latest: Option<(String, PathBuf)> = None;
    for entry in fs::read_dir(dir).map_err(|e| InventoryError::io(dir, e))? {
        let entry = entry.map_err(|e| InventoryError::io(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_snapshot = name.starts_with(FILE_PREFIX)
            && Path::new(&name)
                .extension()
                .is_some_and(|ext| ext == FILE_EXTENSION);
        if !is_snapshot {
            continue;
        }
        // The timestamp is zero-padded, so name order is time order.
        if latest.as_ref().is_none_or(|(best, _)| name > *best) {
            latest = Some((name, entry.path()));
        }
    }

    Ok(latest.map(|(_, path)| path))
}
