use super::DimensionProbe;
use crate::inventory::ImageAttributes;
use std::path::Path;
use tracing::debug;

/// Reads width and height from the image header without decoding pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageDimensionProbe;

impl DimensionProbe for ImageDimensionProbe {
    fn dimensions(&self, path: &Path) -> Option<ImageAttributes> {
        match image::image_dimensions(path) {
            Ok((width, height)) => Some(ImageAttributes { width, height }),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "not a decodable image");
                None
            }
        }
    }
}
