//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Builder for an isolated data directory plus optional pool override
pub struct SandboxBuilder {
    temp_dir: TempDir,
    pool_path: Option<PathBuf>,
}

impl SandboxBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, pool_path: None }
    }

    /// Data directory inside the sandbox
    pub fn data_dir(&self) -> PathBuf {
        self.temp_dir.path().join("data")
    }

    /// Write an activity pool JSON file and use it for every command
    pub fn with_pool(mut self, json: &str) -> Self {
        let path = self.temp_dir.path().join("pool.json");
        fs::write(&path, json).expect("Failed to write pool.json");
        self.pool_path = Some(path);
        self
    }

    /// Write a raw stored entry (e.g. `favorites.json`) into the data directory
    pub fn with_stored(self, filename: &str, content: &str) -> Self {
        let dir = self.data_dir();
        fs::create_dir_all(&dir).expect("Failed to create data dir");
        fs::write(dir.join(filename), content).expect("Failed to write stored entry");
        self
    }

    pub fn stored(&self, filename: &str) -> Option<String> {
        fs::read_to_string(self.data_dir().join(filename)).ok()
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Binary invocation isolated from the caller's environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_activity-suggester"));
        cmd.env_remove("ACTIVITY_SUGGESTER_DATA_DIR")
            .env_remove("ACTIVITY_SUGGESTER_POOL")
            .env_remove("RUST_LOG")
            .arg("--data-dir")
            .arg(self.data_dir());
        if let Some(pool) = &self.pool_path {
            cmd.arg("--pool").arg(pool);
        }
        cmd
    }
}
