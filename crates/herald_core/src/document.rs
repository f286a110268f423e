//! Document snapshots owned by the external store.
//!
//! These are transient in-memory copies held for the duration of one
//! reaction. The optional Discord identifier fields double as idempotency
//! guards: their presence means the document has already been processed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A newsroom workspace, optionally linked to a Discord guild.
///
/// Once `announcements_channel_id` is set the room is considered connected
/// and must never be reprovisioned.
///
/// # Examples
///
/// ```
/// use herald_core::Room;
///
/// let room = Room {
///     id: "r1".to_string(),
///     title: "Alpha".to_string(),
///     guild_id: Some("g1".to_string()),
///     announcements_channel_id: None,
///     newsroom_category_channel_id: None,
/// };
/// assert!(!room.is_connected());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room id.
    pub id: String,
    /// Human-readable room title.
    pub title: String,
    /// Discord guild the room is linked to, if any.
    pub guild_id: Option<String>,
    /// Shared announcements channel, set exactly once on first connection.
    pub announcements_channel_id: Option<String>,
    /// Category grouping the room's channels, set alongside the channel id.
    pub newsroom_category_channel_id: Option<String>,
}

impl Room {
    /// Whether the room has already been provisioned with Discord channels.
    pub fn is_connected(&self) -> bool {
        self.announcements_channel_id.is_some()
    }
}

/// An externally authored work item eligible for announcement.
///
/// A task is announced at most once; the invite code is the idempotency key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task id.
    pub id: String,
    /// Id of the room the task belongs to.
    pub room: String,
    /// Task title, slugged into the channel name.
    pub title: String,
    /// Creation timestamp; tasks before the configured cutoff are skipped.
    pub created: DateTime<Utc>,
    /// Name of the channel provisioned for this task, if announced.
    pub discord_channel_name: Option<String>,
    /// Non-expiring invite into the task channel, if announced.
    pub discord_invite_code: Option<String>,
}

impl Task {
    /// Whether the task has already been announced.
    pub fn is_announced(&self) -> bool {
        self.discord_invite_code.is_some()
    }
}

/// A funding proposal eligible for announcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    /// Unique proposal id.
    pub id: String,
    /// Id of the room the proposal belongs to.
    pub room: String,
    /// Proposal title.
    pub title: String,
    /// Requested amount.
    pub amount: f64,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Whether the proposal passed verification.
    pub verified: bool,
    /// Workstream (task) this proposal targets, for routed announcements.
    pub workstream_id: Option<String>,
    /// Id of the posted announcement message, if announced.
    pub discord_message_id: Option<String>,
}

impl Proposal {
    /// Whether the proposal has already been announced.
    pub fn is_announced(&self) -> bool {
        self.discord_message_id.is_some()
    }
}

/// One newly added document observed on a change feed.
///
/// Produced by the store's subscription, consumed by exactly one handler
/// invocation, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent<T> {
    /// Store-assigned document id.
    pub id: String,
    /// Field snapshot at the time the addition was observed.
    pub document: T,
}
