pub mod compare;
pub mod config;
pub mod info;
pub mod list;
pub mod save;
pub mod search;
pub mod stat;

use crate::DirsnapContext;
use crate::inventory::{Inventory, Scanner};
use anyhow::{Context, Result};
use std::path::Path;

/// Scan `dir` with the scan options configured in `ctx`.
///
/// # Errors
///
/// Returns an error if `dir` is not a readable directory.
pub fn scan_dir(ctx: &DirsnapContext, dir: &Path) -> Result<Inventory> {
    Scanner::new(ctx.config.scan_options())
        .scan(dir)
        .with_context(|| format!("Failed to scan {}", dir.display()))
}
