use crate::inventory::ImageAttributes;
use crate::probe::{GpsCoordinates, Resolution};
use chrono::{DateTime, Local};

/// Shown for metadata a file does not carry
pub const NOT_AVAILABLE: &str = "Non disponible";

/// Formats bytes into human-readable size
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    #[allow(clippy::cast_precision_loss)]
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{bytes} {}", UNITS[unit_index])
    } else {
        format!("{size:.2} {}", UNITS[unit_index])
    }
}

/// Formats a local timestamp as `YYYY-MM-DD HH:MM:SS`
#[must_use]
pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `W x H`, or "Non disponible"
#[must_use]
pub fn format_dimensions(image: Option<ImageAttributes>) -> String {
    image.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |i| format!("{} x {}", i.width, i.height),
    )
}

/// `X x Y` dots per inch, or "Non disponible"
#[must_use]
pub fn format_resolution(dpi: Option<Resolution>) -> String {
    dpi.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |r| format!("{} x {}", r.x, r.y),
    )
}

/// `latitude, longitude` with six decimals, or "Non disponible"
#[must_use]
pub fn format_gps(gps: Option<GpsCoordinates>) -> String {
    gps.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |g| format!("{:.6}, {:.6}", g.latitude, g.longitude),
    )
}
