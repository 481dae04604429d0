use super::DiffResult;
use colored::Colorize;
use std::io::{self, Write};

/// Prefix of a removed path line.
pub const REMOVED_PREFIX: &str = "Fichier supprimé :";

/// Prefix of an added path line.
pub const ADDED_PREFIX: &str = "Fichier ajouté :";

/// Line printed when nothing changed.
pub const NO_CHANGES: &str = "Aucun changement détecté.";

/// Configuration for report rendering
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportConfig {
    /// Whether to colorize the output
    pub colorize: bool,
}

/// Write the diff report
///
/// One line per removed path, then one line per added path, or a single
/// "no changes" line when the result is empty.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_report(
    diff: &DiffResult,
    config: ReportConfig,
    writer: &mut dyn Write,
) -> io::Result<()> {
    if diff.is_empty() {
        writeln!(writer, "{NO_CHANGES}")?;
        return Ok(());
    }

    for path in &diff.removed {
        let line = format!("{REMOVED_PREFIX} {path}");
        if config.colorize {
            writeln!(writer, "{}", line.red())?;
        } else {
            writeln!(writer, "{line}")?;
        }
    }

    for path in &diff.added {
        let line = format!("{ADDED_PREFIX} {path}");
        if config.colorize {
            writeln!(writer, "{}", line.green())?;
        } else {
            writeln!(writer, "{line}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compare;
    use crate::inventory::PathSet;

    fn render(diff: &DiffResult) -> String {
        let mut buf = Vec::new();
        write_report(diff, ReportConfig::default(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_no_changes_line() {
        assert_eq!(render(&DiffResult::default()), "Aucun changement détecté.\n");
    }

    #[test]
    fn test_report_lines() {
        let snapshot: PathSet = ["/d/x", "/d/y"].iter().map(|s| (*s).to_string()).collect();
        let current: PathSet = ["/d/x", "/d/w"].iter().map(|s| (*s).to_string()).collect();

        let text = render(&compare(&current, &snapshot));
        assert_eq!(
            text,
            "Fichier supprimé : /d/y\nFichier ajouté : /d/w\n"
        );
    }
}
