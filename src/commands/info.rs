use crate::DirsnapContext;
use crate::inventory::FileRecord;
use crate::probe::{
    DimensionProbe, ExifProbe, ExifSummary, FsMetadataProbe, ImageDimensionProbe, KamadakExifProbe,
};
use crate::snapshot::writer::render_record;
use crate::utils::formatters::{format_dimensions, format_gps, format_resolution};
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

/// Print the record of `file`, followed by its image metadata for images
///
/// # Errors
///
/// Returns an error if:
/// - `file` does not exist or is not a regular file
/// - Its metadata or EXIF block cannot be read
pub fn execute(ctx: &DirsnapContext, file: &Path) -> Result<()> {
    let dimensions: Option<&dyn DimensionProbe> = ctx
        .config
        .scan
        .probe_dimensions
        .then_some(&ImageDimensionProbe as &dyn DimensionProbe);
    let record = probe_file(file, dimensions)?;

    let exif = if record.is_image() {
        Some(
            KamadakExifProbe
                .exif(record.absolute_path())
                .with_context(|| format!("Failed to read EXIF data of {}", file.display()))?,
        )
    } else {
        None
    };

    let mut out = io::stdout().lock();
    write_info(&record, exif.as_ref(), &mut out)?;
    Ok(())
}

/// Probe a single file into a record
///
/// # Errors
///
/// Returns an error if `file` is not a readable regular file.
pub fn probe_file(file: &Path, dimensions: Option<&dyn DimensionProbe>) -> Result<FileRecord> {
    if !file.is_file() {
        anyhow::bail!("Not a file: {}", file.display());
    }
    let absolute = std::path::absolute(file)
        .with_context(|| format!("Failed to resolve {}", file.display()))?;

    FileRecord::probe(&absolute, &FsMetadataProbe, dimensions)
        .with_context(|| format!("Failed to read metadata of {}", file.display()))
}

/// Write the record block and, when `exif` is given, the metadata block
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_info(
    record: &FileRecord,
    exif: Option<&ExifSummary>,
    out: &mut dyn Write,
) -> io::Result<()> {
    render_record(record, out)?;

    if let Some(exif) = exif {
        writeln!(out)?;
        writeln!(out, "Métadonnées de l'image :")?;
        writeln!(out, "Dimensions : {}", format_dimensions(record.image()))?;
        writeln!(out, "DPI : {}", format_resolution(exif.dpi))?;
        writeln!(out, "Coordonnées GPS : {}", format_gps(exif.gps))?;
    }
    Ok(())
}
