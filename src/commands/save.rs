use crate::DirsnapContext;
use crate::output;
use crate::snapshot;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Write a snapshot of `dir`
///
/// The snapshot goes to `destination`, or to the configured snapshot
/// directory when none is given.
///
/// # Errors
///
/// Returns an error if:
/// - `dir` does not exist or cannot be read
/// - The destination cannot be created or written
pub fn execute(ctx: &DirsnapContext, dir: &Path, destination: Option<&Path>) -> Result<PathBuf> {
    let inventory = super::scan_dir(ctx, dir)?;
    let destination = destination.unwrap_or(&ctx.config.snapshot.directory);

    output::verbose(&format!(
        "Writing {} file(s) to {}",
        inventory.len(),
        destination.display()
    ));
    let path = snapshot::write(&inventory, destination)
        .with_context(|| format!("Failed to save snapshot to {}", destination.display()))?;

    println!("Snapshot enregistré dans : {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::TestWorkspace;
    use std::fs;

    #[test]
    fn test_save_to_configured_directory() -> Result<()> {
        let ws = TestWorkspace::new()?;
        ws.create_file("a.txt", "a")?;

        let path = execute(&ws.context, &ws.scan_dir, None)?;

        assert_eq!(path.parent(), Some(ws.snapshot_dir()));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("snapshot_") && name.ends_with(".txt"));
        assert_eq!(snapshot::parse(&path)?, [ws.key("a.txt")?].into());
        Ok(())
    }

    #[test]
    fn test_save_to_explicit_destination() -> Result<()> {
        let ws = TestWorkspace::new()?;
        let dest = ws.temp_dir.path().join("elsewhere");

        let path = execute(&ws.context, &ws.scan_dir, Some(&dest))?;

        assert!(path.starts_with(&dest));
        assert!(!ws.snapshot_dir().exists());
        assert!(fs::read_to_string(&path)?.contains("Nombre total de fichiers : 0"));
        Ok(())
    }

    #[test]
    fn test_save_missing_directory_writes_nothing() -> Result<()> {
        let ws = TestWorkspace::new()?;

        assert!(execute(&ws.context, &ws.scan_dir.join("gone"), None).is_err());
        assert!(!ws.snapshot_dir().exists());
        Ok(())
    }
}
