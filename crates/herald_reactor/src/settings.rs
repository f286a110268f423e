//! Guild settings resolution.

use crate::ReactionConfig;
use herald_core::GuildSettings;
use herald_interface::DocumentStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Maps a room id to the Discord identifiers needed to act on it.
///
/// Precedence is total: per-room settings when the room carries all three
/// identifiers, then the configured catch-all guild, then `None` (the caller
/// aborts its reaction). Store lookup errors are logged and treated as an
/// absent room: the reaction is best-effort and will either retry on the
/// next relevant mutation or be silently skipped.
pub struct SettingsResolver<S> {
    store: Arc<S>,
    default_settings: Option<GuildSettings>,
}

impl<S: DocumentStore> SettingsResolver<S> {
    /// Build a resolver over a store and the configured fallback.
    pub fn new(store: Arc<S>, config: &ReactionConfig) -> Self {
        Self {
            store,
            default_settings: config.default_settings(),
        }
    }

    /// Resolve settings for a room, or `None` when no destination exists.
    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, room_id: &str) -> Option<GuildSettings> {
        let room = match self.store.room(room_id).await {
            Ok(room) => room,
            Err(e) => {
                warn!(error = %e, room_id, "room lookup failed, treating as absent");
                None
            }
        };

        if let Some(room) = room
            && let (Some(guild), Some(announcements), Some(category)) = (
                room.guild_id.as_deref(),
                room.announcements_channel_id.as_deref(),
                room.newsroom_category_channel_id.as_deref(),
            )
        {
            return Some(GuildSettings::for_room(guild, announcements, category));
        }

        if self.default_settings.is_some() {
            debug!(room_id, "falling back to default guild settings");
        }
        self.default_settings.clone()
    }
}
