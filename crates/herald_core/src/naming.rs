//! Channel naming helpers.
//!
//! Discord channel names are constrained to lowercase with a limited
//! charset, so slugging is mandatory. The slug must also be deterministic:
//! the invite-code guard is the real idempotency key, but a stable name
//! makes repeated runs debuggable.

use crate::GuildSettings;

/// Title prefix reserved for seeded welcome tasks, which are never announced.
pub const WELCOME_TASK_MARKER: &str = "__";

/// Discord caps channel names at 100 characters.
const MAX_CHANNEL_NAME_LEN: usize = 100;

/// Derive a URL-safe, Discord-valid slug from a title.
///
/// Lowercases, maps runs of non-alphanumeric characters to single hyphens,
/// trims leading/trailing hyphens, and caps the length.
///
/// # Examples
///
/// ```
/// use herald_core::slug;
///
/// assert_eq!(slug("Write docs"), "write-docs");
/// assert_eq!(slug("  Fix: the *thing*!  "), "fix-the-thing");
/// assert_eq!(slug("Écrire"), "crire");
/// ```
pub fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    out.truncate(MAX_CHANNEL_NAME_LEN);
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Compose the destination channel name for a task.
///
/// Under default (catch-all) settings the room id is prepended so channels
/// from different rooms stay distinguishable within the shared guild.
pub fn channel_name(settings: &GuildSettings, room_id: &str, task_title: &str) -> String {
    let base = slug(task_title);
    if settings.prepend_room_name {
        let mut name = format!("{}-{}", slug(room_id), base);
        name.truncate(MAX_CHANNEL_NAME_LEN);
        while name.ends_with('-') {
            name.pop();
        }
        name
    } else {
        base
    }
}

/// Whether a task title carries the welcome-task marker.
///
/// The marker is configurable; [`WELCOME_TASK_MARKER`] is the default.
pub fn is_welcome_task(title: &str, marker: &str) -> bool {
    title.starts_with(marker)
}
