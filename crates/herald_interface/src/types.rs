//! Identifier and payload types exchanged across the capability seams.

use serde::{Deserialize, Serialize};

/// A guild resolved on the chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildRef {
    /// Platform guild id.
    pub id: String,
    /// Guild display name.
    pub name: String,
}

/// A channel resolved or created on the chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRef {
    /// Platform channel id.
    pub id: String,
    /// Channel name.
    pub name: String,
}

/// Platform message identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", _0)]
pub struct MessageId(pub String);

/// Invite code for a channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", _0)]
pub struct InviteCode(pub String);

/// Channel ids written back to a room on first connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomChannels {
    /// Newly created announcements channel.
    pub announcements_channel_id: String,
    /// Newly created category the channel lives under.
    pub newsroom_category_channel_id: String,
}

/// Announcement identifiers written back to a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskAnnouncement {
    /// Name of the provisioned task channel.
    pub channel_name: String,
    /// Non-expiring invite into the channel.
    pub invite_code: String,
}
