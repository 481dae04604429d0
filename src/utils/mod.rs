//! Utility functions and helpers.
//!
//! # Examples
//!
//! ```
//! use dirsnap::utils::format_size;
//!
//! assert_eq!(format_size(1024 * 1024), "1.00 MB");
//! ```

/// Human-readable rendering of sizes, dates and image metadata
pub mod formatters;

pub use formatters::{format_size, format_timestamp};
