//! Capability interfaces for per-file probing.
//!
//! The scanner and the `info` command never talk to a metadata or image
//! library directly. They go through the three traits below, and the
//! library bindings live in the adapter submodules:
//!
//! - [`FsMetadataProbe`]: `std::fs` metadata plus an extension-based content type
//! - [`ImageDimensionProbe`]: header-only dimension decoding with `image`
//! - [`KamadakExifProbe`]: DPI and GPS tags with `kamadak-exif`
//!
//! Tests substitute their own implementations to pin content types or
//! dimensions without real image files.

mod dimensions;
mod exif_data;
mod metadata;

pub use dimensions::ImageDimensionProbe;
pub use exif_data::KamadakExifProbe;
pub use metadata::FsMetadataProbe;

use crate::inventory::ImageAttributes;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// What a metadata probe reports for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    /// Size in bytes.
    pub size: u64,
    /// Last modification time, when the platform reports one.
    pub modified: Option<SystemTime>,
    /// Best-effort content type such as `image/png`.
    pub mime_type: Option<String>,
}

/// Probes size, modification time and content type of a file.
pub trait MetadataProbe {
    /// Probes `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file's metadata cannot be read. An
    /// undeterminable content type is not an error.
    fn probe(&self, path: &Path) -> io::Result<FileMetadata>;
}

/// Probes pixel dimensions of an image file.
pub trait DimensionProbe {
    /// Returns `None` when `path` is not a decodable image.
    fn dimensions(&self, path: &Path) -> Option<ImageAttributes>;
}

/// Horizontal and vertical resolution in dots per inch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Horizontal resolution.
    pub x: f64,
    /// Vertical resolution.
    pub y: f64,
}

/// Signed decimal coordinates (south and west are negative).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsCoordinates {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// EXIF fields surfaced by the `info` command.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExifSummary {
    /// Resolution, when the primary image declares one.
    pub dpi: Option<Resolution>,
    /// Location, when both latitude and longitude are present.
    pub gps: Option<GpsCoordinates>,
}

/// Reads EXIF resolution and GPS position.
pub trait ExifProbe {
    /// Probes `path`. A file without EXIF data yields an empty summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    fn exif(&self, path: &Path) -> io::Result<ExifSummary>;
}
