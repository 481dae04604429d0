pub mod fixtures {
    use crate::DirsnapContext;
    use crate::config::Config;
    use anyhow::Result;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// A scratch directory to scan plus a context whose snapshots land
    /// beside it.
    pub struct TestWorkspace {
        pub temp_dir: TempDir,
        pub scan_dir: PathBuf,
        pub context: DirsnapContext,
    }

    impl TestWorkspace {
        pub fn new() -> Result<Self> {
            let temp_dir = tempfile::tempdir()?;
            let scan_dir = temp_dir.path().join("scanned");
            fs::create_dir_all(&scan_dir)?;

            let mut config = Config::default();
            config.snapshot.directory = temp_dir.path().join("snapshots");

            let context = DirsnapContext {
                config_path: temp_dir.path().join("config.toml"),
                config,
            };

            Ok(Self {
                temp_dir,
                scan_dir,
                context,
            })
        }

        pub fn snapshot_dir(&self) -> &Path {
            &self.context.config.snapshot.directory
        }

        pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf> {
            let path = self.scan_dir.join(name);
            fs::write(&path, content)?;
            Ok(path)
        }

        pub fn create_png(&self, name: &str, width: u32, height: u32) -> Result<PathBuf> {
            let path = self.scan_dir.join(name);
            image::RgbImage::new(width, height).save(&path)?;
            Ok(path)
        }

        /// Absolute path string of `name` inside the scanned directory, as
        /// it appears in snapshots.
        pub fn key(&self, name: &str) -> Result<String> {
            let abs = std::path::absolute(self.scan_dir.join(name))?;
            Ok(abs.to_string_lossy().into_owned())
        }
    }
}
