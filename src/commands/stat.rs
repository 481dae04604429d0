use crate::DirsnapContext;
use crate::inventory::Statistics;
use crate::utils::format_size;
use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

/// Print the file statistics of `dir`
///
/// # Errors
///
/// Returns an error if:
/// - `dir` does not exist or cannot be read
/// - Writing to stdout fails
pub fn execute(ctx: &DirsnapContext, dir: &Path) -> Result<()> {
    let inventory = super::scan_dir(ctx, dir)?;
    let mut out = io::stdout().lock();
    write_statistics(&inventory.statistics(), &mut out)?;
    Ok(())
}

/// Write the statistics block
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_statistics(stats: &Statistics, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Statistiques des fichiers du répertoire :")?;
    writeln!(out, "Total de fichiers : {}", stats.total_files)?;
    writeln!(out, "Total de fichiers image : {}", stats.images)?;
    writeln!(out, "Nombre d'images PNG : {}", stats.png)?;
    writeln!(out, "Nombre d'images JPEG : {}", stats.jpeg)?;
    writeln!(out, "Nombre d'images WEBP : {}", stats.webp)?;
    writeln!(out, "Autres images : {}", stats.other_images)?;
    writeln!(out, "Autres fichiers : {}", stats.non_images + stats.unknown)?;
    writeln!(out, "Taille totale : {}", format_size(stats.total_bytes))?;
    Ok(())
}
