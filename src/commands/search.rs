use crate::DirsnapContext;
use crate::inventory::{FileRecord, Inventory};
use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

/// Print the image files of `dir` whose name contains `keyword`
///
/// Matching ignores case.
///
/// # Errors
///
/// Returns an error if `dir` cannot be scanned or stdout cannot be written.
pub fn execute(ctx: &DirsnapContext, dir: &Path, keyword: &str) -> Result<()> {
    let inventory = super::scan_dir(ctx, dir)?;
    let mut out = io::stdout().lock();
    write_matches(&inventory, keyword, &mut out)?;
    Ok(())
}

/// Image records whose name contains `keyword`, ignoring case.
pub fn matching_images<'a>(
    inventory: &'a Inventory,
    keyword: &str,
) -> impl Iterator<Item = &'a FileRecord> {
    let needle = keyword.to_lowercase();
    inventory
        .images()
        .filter(move |r| r.name().to_lowercase().contains(&needle))
}

/// Write the search results for `keyword`
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_matches(inventory: &Inventory, keyword: &str, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Résultats de recherche pour \"{keyword}\" :")?;

    let mut found = false;
    for record in matching_images(inventory, keyword) {
        found = true;
        writeln!(out, "{} existe dans le répertoire.", record.name())?;
    }

    if !found {
        writeln!(out, "Aucune image trouvée contenant le mot-clé \"{keyword}\".")?;
    }
    Ok(())
}
