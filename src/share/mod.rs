//! Sharing a suggestion.
//!
//! The terminal has no share sheet, so the only target is the system clipboard:
//! the "going to do X" message is copied for the user to paste anywhere.

mod clipboard;

use anyhow::Result;

pub use clipboard::copy_to_clipboard;

/// Message announcing the plan to do `activity`
///
/// A leading capital is lowercased so the activity reads naturally mid-sentence.
pub fn share_message(activity: &str) -> String {
    let activity = activity.trim();
    let mut chars = activity.chars();
    let phrase = match chars.next() {
        Some(first) if first.is_uppercase() => first.to_lowercase().chain(chars).collect(),
        _ => activity.to_string(),
    };
    format!("I'm going to {}! 🎯", phrase)
}

/// Copy the share message for `activity` to the clipboard and return it
pub fn share_to_clipboard(activity: &str) -> Result<String> {
    if activity.trim().is_empty() {
        anyhow::bail!("Nothing to share yet");
    }
    let message = share_message(activity);
    copy_to_clipboard(&message)?;
    Ok(message)
}
