use crate::DirsnapContext;
use crate::diff::{self, DiffResult, ReportConfig};
use crate::output;
use crate::snapshot::{self, Leniency, SnapshotParser};
use anyhow::{Context, Result};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

/// Compare `dir` against a snapshot and print the added/removed report
///
/// Without an explicit `snapshot_path`, the most recent snapshot of the
/// configured snapshot directory is used. `strict` forces strict parsing;
/// otherwise the configured leniency applies.
///
/// # Errors
///
/// Returns an error if:
/// - `dir` does not exist or cannot be read
/// - No snapshot is given and none exists in the snapshot directory
/// - The snapshot cannot be read, or is incomplete under strict parsing
pub fn execute(
    ctx: &DirsnapContext,
    dir: &Path,
    snapshot_path: Option<&Path>,
    strict: bool,
) -> Result<DiffResult> {
    let snapshot_path = match snapshot_path {
        Some(path) => path.to_path_buf(),
        None => latest_snapshot(ctx)?,
    };
    let leniency = if strict {
        Leniency::Strict
    } else {
        ctx.config.leniency()
    };

    let result = run(ctx, dir, &snapshot_path, leniency)?;

    let mut out = io::stdout().lock();
    let config = ReportConfig {
        colorize: io::stdout().is_terminal(),
    };
    diff::write_report(&result, config, &mut out)?;
    Ok(result)
}

/// Scan `dir`, parse the snapshot and compute the difference
///
/// # Errors
///
/// See [`execute`].
pub fn run(
    ctx: &DirsnapContext,
    dir: &Path,
    snapshot_path: &Path,
    leniency: Leniency,
) -> Result<DiffResult> {
    let inventory = super::scan_dir(ctx, dir)?;

    let parsed = SnapshotParser::new(leniency)
        .parse_file(snapshot_path)
        .with_context(|| format!("Failed to read snapshot {}", snapshot_path.display()))?;
    if parsed.skipped_lines > 0 || parsed.count_mismatch() {
        output::warning(&format!(
            "Snapshot {} looks incomplete; the report may be partial",
            snapshot_path.display()
        ));
    }
    output::verbose(&format!(
        "Comparing {} current file(s) with {} snapshot entries",
        inventory.len(),
        parsed.paths.len()
    ));

    Ok(diff::compare(&inventory.paths(), &parsed.paths))
}

fn latest_snapshot(ctx: &DirsnapContext) -> Result<PathBuf> {
    let dir = &ctx.config.snapshot.directory;
    let latest = snapshot::latest_in(dir)?.with_context(|| {
        format!(
            "No snapshot found in {}; run 'dirsnap save' first or pass a snapshot file",
            dir.display()
        )
    })?;
    output::info(&format!("Using snapshot {}", latest.display()));
    Ok(latest)
}
