//! Command-line interface definitions for dirsnap.
//!
//! This module contains all CLI argument parsing structures using clap's derive macros.
//! The CLI definitions are shared between the main binary and build tools (like xtask)
//! for man page generation.
//!
//! Note: Field-level documentation is provided via clap attributes (#[arg(help = "...")]),
//! so we allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for dirsnap.
#[derive(Parser)]
#[command(
    name = "dirsnap",
    version = crate::VERSION,
    about = "Directory inventory snapshots with added/removed file reports",
    long_about = "Scans one directory level, classifies image files, writes text snapshots \
                  and reports which files appeared or disappeared since a snapshot"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file to use
    #[arg(long, global = true, env = crate::CONFIG_PATH_ENV, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// All available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show file statistics of a directory
    Stat {
        /// Directory to scan
        dir: PathBuf,
    },

    /// List the image files of a directory
    List {
        /// Directory to scan
        dir: PathBuf,
    },

    /// Find image files whose name contains a keyword
    Search {
        /// Directory to scan
        dir: PathBuf,

        /// Case-insensitive part of the file name
        keyword: String,
    },

    /// Write a snapshot of a directory
    Save {
        /// Directory to scan
        dir: PathBuf,

        /// Destination directory (defaults to snapshot.directory)
        #[arg(short, long, value_name = "DEST")]
        output: Option<PathBuf>,
    },

    /// Report files added or removed since a snapshot
    Compare {
        /// Directory to scan
        dir: PathBuf,

        /// Snapshot file (defaults to the most recent one in snapshot.directory)
        snapshot: Option<PathBuf>,

        /// Reject malformed or truncated snapshots
        #[arg(long)]
        strict: bool,
    },

    /// Show the details and image metadata of one file
    Info {
        /// File to inspect
        file: PathBuf,
    },

    /// Get and set configuration options
    Config {
        /// Configuration key (e.g. snapshot.directory)
        key: Option<String>,

        /// Configuration value to set
        value: Option<String>,

        /// List all configuration values
        #[arg(short, long)]
        list: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
