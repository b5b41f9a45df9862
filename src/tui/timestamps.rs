use chrono::{DateTime, Local, Utc};

/// Format a history timestamp relative to `now`:
/// "just now", "12m ago", "3h ago", or the local clock time after a day
pub fn format_elapsed(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*timestamp).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours >= 24 {
        timestamp.with_timezone(&Local).format("%b %-d %H:%M").to_string()
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}
