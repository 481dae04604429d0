#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
// Allow pedantic strict lints that create false positives in this codebase
#![allow(clippy::arithmetic_side_effects)] // Counters over a single directory listing
#![allow(clippy::float_arithmetic)] // Required for size and coordinate formatting

//! # Dirsnap - Directory Inventory Snapshots
//!
//! Dirsnap scans one directory level, classifies the files it finds by
//! content type, writes a human-readable French snapshot of the inventory and
//! later tells which files were added or removed since that snapshot.
//!
//! ## Architecture
//!
//! - [`inventory`]: one-level scanner, file records and the image classifier
//! - [`probe`]: metadata, pixel dimension and EXIF capabilities with their
//!   default adapters
//! - [`snapshot`]: snapshot text writer and the lenient/strict parser
//! - [`diff`]: added/removed set comparison and its report
//! - [`commands`]: command implementations (stat, list, save, compare, ...)
//! - [`config`]: configuration parsing and validation
//! - [`output`]: status message styling
//! - [`utils`]: formatting helpers
//!
//! ## Example Usage
//!
//! ```no_run
//! use dirsnap::{diff, inventory, snapshot};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let before = inventory::scan(Path::new("photos"))?;
//! let written = snapshot::write(&before, Path::new("snapshots"))?;
//!
//! // ... files come and go ...
//!
//! let now = inventory::scan(Path::new("photos"))?;
//! let result = diff::compare(&now.paths(), &snapshot::parse(&written)?);
//! println!("{} added, {} removed", result.added.len(), result.removed.len());
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Commands module containing all CLI command implementations.
pub mod commands;

/// Configuration parsing, validation, and management.
pub mod config;

/// Set comparison between a live inventory and a snapshot.
pub mod diff;

/// Library error taxonomy.
pub mod error;

/// Directory scanning, file records and classification.
pub mod inventory;

/// Output formatting and verbosity handling.
pub mod output;

/// File metadata, pixel dimension and EXIF probes.
pub mod probe;

/// Snapshot text format: writer and parser.
pub mod snapshot;

/// Utility functions and helpers.
pub mod utils;

#[cfg(test)]
mod test_utils;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Current version of the dirsnap binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "DIRSNAP_CONFIG_PATH";

/// Configuration file path relative to the platform config directory.
pub const DEFAULT_CONFIG_PATH: &str = "dirsnap/config.toml";

/// Central context for all dirsnap commands.
///
/// Holds the configuration file location and the configuration loaded from
/// it. A missing configuration file is not an error: the defaults apply and
/// nothing is written until `dirsnap config KEY VALUE` is run.
///
/// # Examples
///
/// ```no_run
/// use dirsnap::DirsnapContext;
///
/// # fn main() -> anyhow::Result<()> {
/// // Default location, honouring DIRSNAP_CONFIG_PATH
/// let ctx = DirsnapContext::new()?;
///
/// // Explicit location (for tests and --config)
/// let ctx = DirsnapContext::new_explicit("/tmp/dirsnap.toml".into())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DirsnapContext {
    /// Path to the configuration file.
    pub config_path: PathBuf,

    /// Loaded configuration settings.
    pub config: config::Config,
}

impl DirsnapContext {
    /// Creates a context from the default configuration location.
    ///
    /// `DIRSNAP_CONFIG_PATH` wins over `<config_dir>/dirsnap/config.toml`.
    ///
    /// # Errors
    /// Returns an error if no configuration directory can be determined or
    /// if an existing configuration file cannot be read or is invalid.
    pub fn new() -> Result<Self> {
        let config_path = if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            PathBuf::from(path)
        } else {
            let base = dirs::config_dir().context("Could not find configuration directory")?;
            base.join(DEFAULT_CONFIG_PATH)
        };

        Self::new_explicit(config_path)
    }

    /// Creates a context from an explicit configuration file path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or is invalid.
    pub fn new_explicit(config_path: PathBuf) -> Result<Self> {
        let config = config::Config::load(&config_path)?;
        Ok(Self {
            config_path,
            config,
        })
    }
}
