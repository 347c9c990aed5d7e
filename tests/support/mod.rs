#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use taski::task::TaskBook;
use tempfile::TempDir;

/// A temp directory holding an isolated data file and config for one test.
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_file(&self) -> PathBuf {
        self.dir.path().join("data.json")
    }

    pub fn config_file(&self) -> PathBuf {
        self.dir.path().join("taski.toml")
    }

    pub fn write_config(&self, contents: &str) -> std::io::Result<()> {
        fs::write(self.config_file(), contents)
    }

    pub fn write_data(&self, contents: &str) -> std::io::Result<()> {
        fs::write(self.data_file(), contents)
    }

    /// Decode the raw data file, deleted records included.
    pub fn read_book(&self) -> TaskBook {
        let contents = fs::read_to_string(self.data_file()).expect("data file");
        serde_json::from_str(&contents).expect("valid data file")
    }

    /// A taski command isolated to this home: data file and config both
    /// point inside the tempdir so the user's real state is never touched.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("taski").expect("binary");
        cmd.env("TASKI_FILE", self.data_file());
        cmd.env("TASKI_CONFIG", self.config_file());
        cmd
    }
}
