//! Coarse content-type buckets and the statistics derived from them.

use super::FileRecord;
use std::fmt;

/// Statistics bucket of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `image/png`
    Png,
    /// `image/jpeg`
    Jpeg,
    /// `image/webp`
    Webp,
    /// Any other `image/*` type
    OtherImage,
    /// A known, non-image content type
    NonImage,
    /// Content type could not be determined
    Unknown,
}

impl Category {
    /// Buckets a content type by prefix.
    #[must_use]
    pub fn from_mime(mime_type: Option<&str>) -> Self {
        match mime_type {
            None => Self::Unknown,
            Some(m) if m.starts_with("image/png") => Self::Png,
            Some(m) if m.starts_with("image/jpeg") => Self::Jpeg,
            Some(m) if m.starts_with("image/webp") => Self::Webp,
            Some(m) if m.starts_with("image/") => Self::OtherImage,
            Some(_) => Self::NonImage,
        }
    }

    /// Whether this bucket counts as an image.
    #[must_use]
    pub const fn is_image(self) -> bool {
        matches!(self, Self::Png | Self::Jpeg | Self::Webp | Self::OtherImage)
    }

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Webp => "webp",
            Self::OtherImage => "other-image",
            Self::NonImage => "non-image",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Buckets a record by its probed content type.
#[must_use]
pub fn classify(record: &FileRecord) -> Category {
    Category::from_mime(record.mime_type())
}

/// Aggregate counts over an inventory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Number of records.
    pub total_files: usize,
    /// Records in any image bucket.
    pub images: usize,
    /// PNG images.
    pub png: usize,
    /// JPEG images.
    pub jpeg: usize,
    /// WEBP images.
    pub webp: usize,
    /// Images that are neither PNG, JPEG nor WEBP.
    pub other_images: usize,
    /// Records with a known non-image type.
    pub non_images: usize,
    /// Records with no content type.
    pub unknown: usize,
    /// Sum of record sizes.
    pub total_bytes: u64,
}

impl Statistics {
    /// Counts `records` into buckets.
    pub fn collect<'a>(records: impl IntoIterator<Item = &'a FileRecord>) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.add(record);
        }
        stats
    }

    fn add(&mut self, record: &FileRecord) {
        self.total_files += 1;
        self.total_bytes += record.size_bytes();

        let category = classify(record);
        if category.is_image() {
            self.images += 1;
        }
        match category {
            Category::Png => self.png += 1,
            Category::Jpeg => self.jpeg += 1,
            Category::Webp => self.webp += 1,
            Category::OtherImage => self.other_images += 1,
            Category::NonImage => self.non_images += 1,
            Category::Unknown => self.unknown += 1,
        }
    }
}
