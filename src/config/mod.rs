//! Configuration file handling.
//!
//! The configuration is a small TOML document:
//!
//! ```toml
//! [snapshot]
//! directory = "snapshots"
//! strict = false
//!
//! [scan]
//! follow_symlinks = false
//! probe_dimensions = true
//! ```
//!
//! Every key is optional; a missing file means all defaults.

pub mod parser;

use crate::inventory::ScanOptions;
use crate::snapshot::Leniency;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Snapshot writing and reading.
    #[serde(default)]
    pub snapshot: SnapshotConfig,

    /// Directory scanning.
    #[serde(default)]
    pub scan: ScanConfig,
}

/// `[snapshot]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotConfig {
    /// Where `save` writes snapshots and where `compare` looks for the latest one.
    #[serde(default = "default_snapshot_dir")]
    pub directory: PathBuf,
    /// Parse snapshots strictly unless told otherwise.
    #[serde(default)]
    pub strict: bool,
}

/// `[scan]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Record symbolic links to files as files.
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Probe pixel dimensions of image files.
    #[serde(default = "default_probe_dimensions")]
    pub probe_dimensions: bool,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            directory: default_snapshot_dir(),
            strict: false,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            probe_dimensions: default_probe_dimensions(),
        }
    }
}

impl From<&ScanConfig> for ScanOptions {
    fn from(config: &ScanConfig) -> Self {
        Self {
            follow_symlinks: config.follow_symlinks,
            probe_dimensions: config.probe_dimensions,
        }
    }
}

impl Config {
    /// Load configuration from a file
    ///
    /// A missing file yields the default configuration; nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML or invalid values
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        parser::parse_config_file(path)
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Cannot create parent directories
    /// - Cannot write to the file
    /// - TOML serialization fails
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create config file: {}", path.display()))?;
        file.write_all(toml_str.as_bytes())?;
        Ok(())
    }

    /// Parser leniency requested by the configuration.
    #[must_use]
    pub const fn leniency(&self) -> Leniency {
        Leniency::from_strict(self.snapshot.strict)
    }

    /// Scan options requested by the configuration.
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::from(&self.scan)
    }

    /// All `section.key = value` pairs, in a stable order.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }

    /// Get a configuration value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "snapshot.directory" => Some(self.snapshot.directory.display().to_string()),
            "snapshot.strict" => Some(self.snapshot.strict.to_string()),
            "scan.follow_symlinks" => Some(self.scan.follow_symlinks.to_string()),
            "scan.probe_dimensions" => Some(self.scan.probe_dimensions.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The key is unknown
    /// - The value is invalid for the key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "snapshot.directory" => {
                if value.trim().is_empty() {
                    anyhow::bail!("Snapshot directory cannot be empty");
                }
                self.snapshot.directory = PathBuf::from(value);
            }
            "snapshot.strict" => self.snapshot.strict = parse_bool(value)?,
            "scan.follow_symlinks" => self.scan.follow_symlinks = parse_bool(value)?,
            "scan.probe_dimensions" => self.scan.probe_dimensions = parse_bool(value)?,
            _ => anyhow::bail!("Unknown configuration key: {key}"),
        }
        Ok(())
    }
}

/// Keys understood by [`Config::get`] and [`Config::set`].
pub const KEYS: [&str; 4] = [
    "snapshot.directory",
    "snapshot.strict",
    "scan.follow_symlinks",
    "scan.probe_dimensions",
];

fn parse_bool(value: &str) -> Result<bool> {
    value
        .parse()
        .with_context(|| format!("Invalid boolean: {value}"))
}

// Default functions for serde
fn default_snapshot_dir() -> PathBuf {
    PathBuf::from("snapshots")
}

const fn default_probe_dimensions() -> bool {
    true
}
