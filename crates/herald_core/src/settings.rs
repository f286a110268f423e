//! Resolved guild settings view.

use serde::{Deserialize, Serialize};

/// Discord identifiers needed to act on a room.
///
/// A read-only view derived per reaction from the room document, or from the
/// process-wide default configuration when the room has not opted into
/// per-room channels. Never persisted.
///
/// `prepend_room_name` governs channel naming under the default fallback: a
/// catch-all guild serves many rooms, so task channels get a `{room}-` prefix
/// to stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildSettings {
    /// Guild to provision resources in.
    pub guild_id: String,
    /// Shared announcements channel.
    pub announcements_channel_id: String,
    /// Category that task channels are created under.
    pub newsroom_category_channel_id: String,
    /// Prefix task channel names with the room id.
    pub prepend_room_name: bool,
}

impl GuildSettings {
    /// Build per-room settings (no name prefix).
    pub fn for_room(
        guild_id: impl Into<String>,
        announcements_channel_id: impl Into<String>,
        newsroom_category_channel_id: impl Into<String>,
    ) -> Self {
        Self {
            guild_id: guild_id.into(),
            announcements_channel_id: announcements_channel_id.into(),
            newsroom_category_channel_id: newsroom_category_channel_id.into(),
            prepend_room_name: false,
        }
    }

    /// Build catch-all default settings (room-prefixed channel names).
    pub fn fallback(
        guild_id: impl Into<String>,
        announcements_channel_id: impl Into<String>,
        newsroom_category_channel_id: impl Into<String>,
    ) -> Self {
        Self {
            guild_id: guild_id.into(),
            announcements_channel_id: announcements_channel_id.into(),
            newsroom_category_channel_id: newsroom_category_channel_id.into(),
            prepend_room_name: true,
        }
    }
}
