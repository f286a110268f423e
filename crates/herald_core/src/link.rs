//! Deep links into the newsroom web application.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

/// Build a deep link for creating a task in a room.
///
/// Pure; used by the companion text command and by announcement messages.
///
/// # Examples
///
/// ```
/// use herald_core::task_creation_link;
///
/// let url = task_creation_link("https://app.example.org", "r1", "Write docs");
/// assert_eq!(url, "https://app.example.org/rooms/r1/tasks/new?title=Write%20docs");
/// ```
pub fn task_creation_link(base_url: &str, room_id: &str, title: &str) -> String {
    let title = utf8_percent_encode(title, NON_ALPHANUMERIC).to_string();
    format!(
        "{}/rooms/{}/tasks/new?title={}",
        base_url.trim_end_matches('/'),
        room_id,
        title
    )
}

/// Build a deep link to an existing task.
///
/// # Examples
///
/// ```
/// use herald_core::task_link;
///
/// let url = task_link("https://app.example.org", "r1", "t1");
/// assert_eq!(url, "https://app.example.org/rooms/r1/tasks/t1");
/// ```
pub fn task_link(base_url: &str, room_id: &str, task_id: &str) -> String {
    format!(
        "{}/rooms/{}/tasks/{}",
        base_url.trim_end_matches('/'),
        room_id,
        task_id
    )
}
