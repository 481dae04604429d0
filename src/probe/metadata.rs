use super::{FileMetadata, MetadataProbe};
use std::fs;
use std::io;
use std::path::Path;

/// Filesystem metadata with the content type guessed from the file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsMetadataProbe;

impl MetadataProbe for FsMetadataProbe {
    fn probe(&self, path: &Path) -> io::Result<FileMetadata> {
        let metadata = fs::metadata(path)?;
        let mime_type = mime_guess::from_path(path)
            .first()
            .map(|mime| mime.essence_str().to_string());

        Ok(FileMetadata {
            size: metadata.len(),
            modified: metadata.modified().ok(),
            mime_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_probe_known_extensions() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let png = temp_dir.path().join("a.png");
        let jpg = temp_dir.path().join("c.JPG");
        fs::write(&png, b"not really a png")?;
        fs::write(&jpg, b"")?;

        let meta = FsMetadataProbe.probe(&png)?;
        assert_eq!(meta.size, 16);
        assert_eq!(meta.mime_type.as_deref(), Some("image/png"));
        assert!(meta.modified.is_some());

        let meta = FsMetadataProbe.probe(&jpg)?;
        assert_eq!(meta.mime_type.as_deref(), Some("image/jpeg"));
        Ok(())
    }

    #[test]
    fn test_probe_unknown_extension_has_no_mime() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("blob.zzqx");
        fs::write(&path, b"x")?;

        let meta = FsMetadataProbe.probe(&path)?;
        assert_eq!(meta.mime_type, None);
        Ok(())
    }

    #[test]
    fn test_probe_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(FsMetadataProbe.probe(&temp_dir.path().join("gone")).is_err());
    }
}
