//! Status messages for the dirsnap CLI.
//!
//! Reports (statistics, listings, diff lines) are written to stdout so they
//! can be piped or redirected. Status messages from this module go to stderr
//! and are filtered by a process-wide [`Verbosity`]; warnings always show.

use colored::Colorize;
use std::fmt::Display;
use std::sync::atomic::{AtomicU8, Ordering};

/// How chatty status messages are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Warnings only.
    Quiet = 0,
    /// Warnings, successes and informational messages.
    Normal = 1,
    /// Everything, including per-step details.
    Verbose = 2,
}

impl Verbosity {
    /// Level selected by the `--quiet` / `--verbose` flags (quiet wins).
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    const fn from_u8(level: u8) -> Self {
        match level {
            0 => Self::Quiet,
            2 => Self::Verbose,
            _ => Self::Normal,
        }
    }
}

static VERBOSITY: AtomicU8 = AtomicU8::new(Verbosity::Normal as u8);

/// Sets the process-wide verbosity.
pub fn set_verbosity(level: Verbosity) {
    VERBOSITY.store(level as u8, Ordering::Relaxed);
}

/// Current process-wide verbosity.
pub fn get_verbosity() -> Verbosity {
    Verbosity::from_u8(VERBOSITY.load(Ordering::Relaxed))
}

fn enabled(at_least: Verbosity) -> bool {
    get_verbosity() >= at_least
}

/// Green message, hidden in quiet mode.
pub fn success(message: impl Display) {
    if enabled(Verbosity::Normal) {
        eprintln!("{}", message.to_string().green());
    }
}

/// Bold yellow message, always shown.
pub fn warning(message: impl Display) {
    eprintln!("{}", message.to_string().yellow().bold());
}

/// Dimmed message, hidden in quiet mode.
pub fn info(message: impl Display) {
    if enabled(Verbosity::Normal) {
        eprintln!("{}", message.to_string().dimmed());
    }
}

/// Dimmed message, shown only with `--verbose`.
pub fn verbose(message: impl Display) {
    if enabled(Verbosity::Verbose) {
        eprintln!("{}", message.to_string().dimmed());
    }
}
