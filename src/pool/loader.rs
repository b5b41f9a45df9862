use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::ActivityPool;
use crate::models::Category;
use crate::utils::{sanitize_line, validate_file_size};

/// Load an activity pool from a JSON object of `category -> [activities]`
///
/// Unknown category keys are skipped with a warning. Activity strings are
/// reduced to one clean line and dropped if nothing is left. Keys naming the
/// same category (e.g. `"Music"` and `"music"`) are merged in sorted key order,
/// not file order.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, exceeds the size limit, or is
/// not a JSON object of string arrays.
pub fn load_pool_file(path: &Path) -> Result<ActivityPool> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open activity pool: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let raw: BTreeMap<String, Vec<String>> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse activity pool: {}", path.display()))?;

    Ok(pool_from_raw(raw))
}

fn pool_from_raw(raw: BTreeMap<String, Vec<String>>) -> ActivityPool {
    let mut merged: BTreeMap<Category, Vec<String>> = BTreeMap::new();

    for (key, items) in raw {
        let category = match key.parse::<Category>() {
            Ok(category) => category,
            Err(e) => {
                warn!("Skipping activity pool entry: {}", e);
                continue;
            }
        };

        let activities = merged.entry(category).or_default();
        for item in items {
            let cleaned = sanitize_line(&item);
            let trimmed = cleaned.trim();
            if trimmed.is_empty() {
                continue;
            }
            activities.push(trimmed.to_string());
        }
    }

    let pool = ActivityPool::from_entries(merged);
    debug!(total = pool.total(), "Loaded activity pool from file");
    pool
}
