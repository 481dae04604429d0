#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use dirsnap::DirsnapContext;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory fixture: a directory to scan, a snapshot directory and
/// a configuration file pointing at it
pub struct TestDir {
    pub temp_dir: TempDir,
    pub scan_dir: PathBuf,
    pub snapshot_dir: PathBuf,
    pub config_path: PathBuf,
}

impl TestDir {
    /// Create the fixture and write a configuration using its snapshot directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let scan_dir = temp_dir.path().join("scanned");
        let snapshot_dir = temp_dir.path().join("snapshots");
        let config_path = temp_dir.path().join("config.toml");
        fs::create_dir_all(&scan_dir)?;

        let mut ctx = DirsnapContext::new_explicit(config_path.clone())?;
        ctx.config.snapshot.directory.clone_from(&snapshot_dir);
        ctx.config.save(&config_path)?;

        Ok(Self {
            temp_dir,
            scan_dir,
            snapshot_dir,
            config_path,
        })
    }

    /// Get the temporary directory path
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file inside the scanned directory
    pub fn create_file(&self, name: &str, content: &[u8]) -> Result<PathBuf> {
        let path = self.scan_dir.join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write a real PNG inside the scanned directory
    pub fn create_png(&self, name: &str, width: u32, height: u32) -> Result<PathBuf> {
        let path = self.scan_dir.join(name);
        image::RgbImage::new(width, height).save(&path)?;
        Ok(path)
    }

    /// Snapshot path string of `name`
    pub fn key(&self, name: &str) -> Result<String> {
        Ok(std::path::absolute(self.scan_dir.join(name))?
            .to_string_lossy()
            .into_owned())
    }

    /// `dirsnap` bound to this fixture's configuration
    pub fn cmd(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("dirsnap")?;
        cmd.env("DIRSNAP_CONFIG_PATH", &self.config_path)
            .env_remove("DIRSNAP_LOG");
        Ok(cmd)
    }

    /// Snapshot files currently in the snapshot directory
    pub fn snapshots(&self) -> Result<Vec<PathBuf>> {
        if !self.snapshot_dir.exists() {
            return Ok(Vec::new());
        }
        let mut paths = fs::read_dir(&self.snapshot_dir)?
            .map(|e| e.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()?;
        paths.sort();
        Ok(paths)
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new().expect("Failed to create test directory")
    }
}
