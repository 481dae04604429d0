//! Snapshot serialization.

use super::{FILE_EXTENSION, FILE_PREFIX, FORMAT_VERSION, escape_field, labels};
use crate::error::{InventoryError, InventoryResult};
use crate::inventory::{FileRecord, Inventory};
use crate::utils::format_timestamp;
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{Level, info, span};

/// Placeholder for records without a content type.
const UNKNOWN_MIME: &str = "Inconnu";

/// `snapshot_<YYYYMMDD_HHMMSS>.txt` for the given instant.
#[must_use]
pub fn snapshot_file_name(at: DateTime<Local>) -> String {
    format!(
        "{FILE_PREFIX}{}.{FILE_EXTENSION}",
        at.format("%Y%m%d_%H%M%S")
    )
}

/// Write a snapshot of `inventory` into `destination_dir`
///
/// The directory is created if needed. The file is named after the current
/// local time; two writes within the same second replace each other.
///
/// # Errors
///
/// Returns [`InventoryError::Io`] if the directory cannot be created or the
/// file cannot be written.
pub fn write(inventory: &Inventory, destination_dir: &Path) -> InventoryResult<PathBuf> {
    write_at(inventory, destination_dir, Local::now())
}

/// Same as [`write`] with an explicit timestamp for the file name.
///
/// # Errors
///
/// See [`write`].
pub fn write_at(
    inventory: &Inventory,
    destination_dir: &Path,
    at: DateTime<Local>,
) -> InventoryResult<PathBuf> {
    let _span = span!(Level::DEBUG, "write_snapshot", dir = %destination_dir.display()).entered();

    fs::create_dir_all(destination_dir).map_err(|e| InventoryError::io(destination_dir, e))?;

    let path = destination_dir.join(snapshot_file_name(at));
    let file = File::create(&path).map_err(|e| InventoryError::io(&path, e))?;
    let mut out = BufWriter::new(file);
    render(inventory, &mut out)
        .and_then(|()| out.flush())
        .map_err(|e| InventoryError::io(&path, e))?;

    info!(path = %path.display(), files = inventory.len(), "snapshot written");
    Ok(path)
}

/// Render the snapshot document of `inventory` into `out`
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render<W: Write + ?Sized>(inventory: &Inventory, out: &mut W) -> io::Result<()> {
    let stats = inventory.statistics();

    writeln!(
        out,
        "{} {}",
        labels::ROOT,
        escape_field(&inventory.root().to_string_lossy())
    )?;
    writeln!(out, "{} {}", labels::TOTAL, stats.total_files)?;
    writeln!(out, "{} {}", labels::IMAGES, stats.images)?;
    writeln!(out, "{} {}", labels::PNG, stats.png)?;
    writeln!(out, "{} {}", labels::JPEG, stats.jpeg)?;
    writeln!(out, "{} {}", labels::WEBP, stats.webp)?;
    writeln!(out, "{} {FORMAT_VERSION}", labels::VERSION)?;
    writeln!(out)?;
    writeln!(out, "{} :", labels::DETAILS)?;

    for record in inventory.records() {
        render_record(record, out)?;
    }

    Ok(())
}

/// Render one detail block
///
/// Control characters in the name and path are escaped, see
/// [`escape_field`](super::escape_field).
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_record<W: Write + ?Sized>(record: &FileRecord, out: &mut W) -> io::Result<()> {
    writeln!(out, "{} {}", labels::NAME, escape_field(record.name()))?;
    writeln!(out, "{} {}", labels::PATH, escape_field(&record.path_key()))?;
    writeln!(out, "{} {} octets", labels::SIZE, record.size_bytes())?;
    writeln!(
        out,
        "{} {}",
        labels::MODIFIED,
        format_timestamp(record.last_modified())
    )?;
    writeln!(
        out,
        "{} {}",
        labels::MIME,
        record.mime_type().unwrap_or(UNKNOWN_MIME)
    )?;
    if let Some(image) = record.image() {
        writeln!(
            out,
            "{} {} x {}",
            labels::DIMENSIONS,
            image.width,
            image.height
        )?;
    }
    Ok(())
}
