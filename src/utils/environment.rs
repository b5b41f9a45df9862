use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

const APP_DIR_NAME: &str = "activity-suggester";

/// Get the default data directory
///
/// Uses the platform data directory (`~/.local/share` on Linux,
/// `~/Library/Application Support` on macOS) and falls back to `$HOME/.activity-suggester`.
pub fn get_data_dir() -> Result<PathBuf> {
    if let Some(base) = dirs::data_dir() {
        return Ok(base.join(APP_DIR_NAME));
    }
    let home = env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(format!(".{}", APP_DIR_NAME)))
}
