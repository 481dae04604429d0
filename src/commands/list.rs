use crate::DirsnapContext;
use crate::inventory::Inventory;
use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

/// Print the image file names of `dir`, one per line
///
/// # Errors
///
/// Returns an error if `dir` cannot be scanned or stdout cannot be written.
pub fn execute(ctx: &DirsnapContext, dir: &Path) -> Result<()> {
    let inventory = super::scan_dir(ctx, dir)?;
    let mut out = io::stdout().lock();
    write_images(&inventory, &mut out)?;
    Ok(())
}

/// Write the image listing
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_images(inventory: &Inventory, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Liste des fichiers images :")?;
    for record in inventory.images() {
        writeln!(out, "{}", record.name())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::TestWorkspace;

    #[test]
    fn test_lists_only_images_in_name_order() -> Result<()> {
        let ws = TestWorkspace::new()?;
        ws.create_file("notes.md", "# notes")?;
        ws.create_file("b.webp", "")?;
        ws.create_png("a.png", 1, 1)?;

        let inventory = super::super::scan_dir(&ws.context, &ws.scan_dir)?;
        let mut buf = Vec::new();
        write_images(&inventory, &mut buf)?;

        assert_eq!(
            String::from_utf8(buf)?,
            "Liste des fichiers images :\na.png\nb.webp\n"
        );
        Ok(())
    }

    #[test]
    fn test_no_images_prints_header_only() -> Result<()> {
        let ws = TestWorkspace::new()?;
        ws.create_file("readme.txt", "")?;

        let inventory = super::super::scan_dir(&ws.context, &ws.scan_dir)?;
        let mut buf = Vec::new();
        write_images(&inventory, &mut buf)?;

        assert_eq!(String::from_utf8(buf)?, "Liste des fichiers images :\n");
        Ok(())
    }
}
