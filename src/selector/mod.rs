//! Activity selection with bounded duplicate avoidance.
//!
//! Candidates are the union of every selected category's pool entries. One is
//! sampled uniformly; if it repeats the most recent history entry it is
//! resampled, up to [`MAX_SELECTION_ATTEMPTS`] draws in total. After the last
//! draw the result is returned even if it is still a repeat, which is the only
//! possible outcome for a single-activity pool.

use std::collections::BTreeSet;

use rand::Rng;
use thiserror::Error;
use tracing::trace;

use crate::models::{Category, History};
use crate::pool::ActivityPool;

/// Total number of draws made before accepting a repeat
pub const MAX_SELECTION_ATTEMPTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("no category selected")]
    NoCategorySelected,
    #[error("no activities available for the selected categories")]
    NoActivitiesAvailable,
}

/// Candidate activities for a selection, in category declaration order
pub fn candidates<'a>(selected: &BTreeSet<Category>, pool: &'a ActivityPool) -> Vec<&'a str> {
    selected
        .iter()
        .flat_map(|category| pool.activities(*category))
        .map(String::as_str)
        .collect()
}

/// Pick one activity from the selected categories.
///
/// Only `history[0]` is consulted for repeat avoidance.
///
/// # Errors
///
/// - [`SelectError::NoCategorySelected`] if `selected` is empty
/// - [`SelectError::NoActivitiesAvailable`] if the selected categories have no
///   activities in `pool`
pub fn select_activity<R: Rng>(
    selected: &BTreeSet<Category>,
    history: &History,
    pool: &ActivityPool,
    rng: &mut R,
) -> Result<String, SelectError> {
    if selected.is_empty() {
        return Err(SelectError::NoCategorySelected);
    }

    let candidates = candidates(selected, pool);
    if candidates.is_empty() {
        return Err(SelectError::NoActivitiesAvailable);
    }

    let previous = history.latest().map(|entry| entry.activity.as_str());

    let mut pick = candidates[rng.random_range(0..candidates.len())];
    let mut attempts = 1;
    while attempts < MAX_SELECTION_ATTEMPTS && Some(pick) == previous {
        trace!(attempt = attempts, "Resampling repeated activity");
        pick = candidates[rng.random_range(0..candidates.len())];
        attempts += 1;
    }

    Ok(pick.to_string())
}
