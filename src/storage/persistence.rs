//! JSON entry load/save with atomic writes

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Read a JSON entry, returning `None` when it is missing or unreadable
pub fn read_entry<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Stored entry absent");
            return None;
        }
        Err(e) => {
            warn!(path = %path.display(), "Failed to read stored entry: {}", e);
            return None;
        }
    };

    match serde_json::from_str(&contents) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %path.display(), "Discarding corrupt stored entry: {}", e);
            None
        }
    }
}

/// Write a JSON entry atomically (temp file + rename), creating `dir` if needed
pub fn write_entry<T: Serialize + ?Sized>(dir: &Path, filename: &str, value: &T) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
    }

    let path = dir.join(filename);
    let temp = dir.join(format!("{}.tmp", filename));
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", filename))?;
    fs::write(&temp, json).with_context(|| format!("Failed to write {} temp file", filename))?;
    fs::rename(&temp, &path).with_context(|| format!("Failed to rename {} temp file", filename))?;

    debug!(path = %path.display(), "Saved stored entry");
    Ok(())
}
