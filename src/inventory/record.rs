//! The per-file record produced by a scan.

use crate::probe::{DimensionProbe, MetadataProbe};
use chrono::{DateTime, Local};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Pixel dimensions attached to records whose dimension probe succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageAttributes {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// One file of an inventory.
///
/// Built once from a probe and never mutated. Two records denote the same
/// file when their `absolute_path` strings are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    absolute_path: PathBuf,
    name: String,
    size_bytes: u64,
    last_modified: DateTime<Local>,
    mime_type: Option<String>,
    image: Option<ImageAttributes>,
}

impl FileRecord {
    /// Probes `path` and builds its record.
    ///
    /// `path` must already be absolute. Dimensions are only probed for files
    /// whose content type is `image/*` and only when a dimension probe is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata probe fails.
    pub fn probe(
        path: &Path,
        metadata: &dyn MetadataProbe,
        dimensions: Option<&dyn DimensionProbe>,
    ) -> io::Result<Self> {
        let meta = metadata.probe(path)?;

        let is_image = meta
            .mime_type
            .as_deref()
            .is_some_and(|m| m.starts_with("image/"));
        let image = match dimensions {
            Some(probe) if is_image => probe.dimensions(path),
            _ => None,
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            absolute_path: path.to_path_buf(),
            name,
            size_bytes: meta.size,
            last_modified: meta.modified.unwrap_or(SystemTime::UNIX_EPOCH).into(),
            mime_type: meta.mime_type,
            image,
        })
    }

    /// Builds a record from already known values.
    #[must_use]
    pub fn new(
        absolute_path: PathBuf,
        size_bytes: u64,
        last_modified: DateTime<Local>,
        mime_type: Option<String>,
    ) -> Self {
        let name = absolute_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            absolute_path,
            name,
            size_bytes,
            last_modified,
            mime_type,
            image: None,
        }
    }

    /// Returns a copy carrying the given image attributes.
    #[must_use]
    pub fn with_image(mut self, image: ImageAttributes) -> Self {
        self.image = Some(image);
        self
    }

    /// Absolute path of the file.
    #[must_use]
    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    /// Absolute path as the string used for diff identity.
    #[must_use]
    pub fn path_key(&self) -> String {
        self.absolute_path.to_string_lossy().into_owned()
    }

    /// File name including extension.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes.
    #[must_use]
    pub const fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Last modification time.
    #[must_use]
    pub const fn last_modified(&self) -> DateTime<Local> {
        self.last_modified
    }

    /// Probed content type, if any.
    #[must_use]
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    /// Image dimensions, if probed.
    #[must_use]
    pub const fn image(&self) -> Option<ImageAttributes> {
        self.image
    }

    /// Whether the content type is `image/*`.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime_type().is_some_and(|m| m.starts_with("image/"))
    }
}
