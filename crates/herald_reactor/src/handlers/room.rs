//! Room connection reaction.

use crate::{Outcome, ReactionConfig, SkipReason};
use herald_core::{ChangeEvent, Room};
use herald_error::{ChatError, ChatErrorKind, HeraldResult};
use herald_interface::{ChatPlatform, DocumentStore, RoomChannels};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Name of the announcements channel provisioned in every connected room.
const ANNOUNCEMENTS_CHANNEL: &str = "newsroom-announcements";

/// Provisions a category and announcements channel when a room first links
/// to a guild.
///
/// Channel ids are persisted only after both chat resources are confirmed
/// created, so a partial failure leaves the room unmodified. A category
/// orphaned by a mid-sequence failure is not rolled back; cleanup is manual.
pub struct RoomConnectedHandler<S, C> {
    store: Arc<S>,
    chat: Arc<C>,
    config: Arc<ReactionConfig>,
}

impl<S: DocumentStore, C: ChatPlatform> RoomConnectedHandler<S, C> {
    /// Build a handler over the store and chat capabilities.
    pub fn new(store: Arc<S>, chat: Arc<C>, config: Arc<ReactionConfig>) -> Self {
        Self {
            store,
            chat,
            config,
        }
    }

    /// Run the reaction for one observed room connection.
    #[instrument(skip(self, event), fields(room_id = %event.id))]
    pub async fn handle(&self, event: ChangeEvent<Room>) -> HeraldResult<Outcome> {
        let room = &event.document;

        if room.is_connected() {
            debug!(room_id = %room.id, "room already has an announcements channel");
            return Ok(Outcome::Skipped(SkipReason::AlreadyConnected));
        }

        let Some(guild_id) = room.guild_id.as_deref() else {
            warn!(room_id = %room.id, "connection event without a guild id");
            return Ok(Outcome::Skipped(SkipReason::MissingGuildLink));
        };

        // Missing guild is fatal for this reaction; there is no retry.
        if self.chat.guild(guild_id).await?.is_none() {
            return Err(ChatError::new(ChatErrorKind::GuildNotFound(guild_id.to_string())).into());
        }

        let category = self.chat.create_category(guild_id, &room.title).await?;
        let channel = self
            .chat
            .create_text_channel(guild_id, Some(&category.id), ANNOUNCEMENTS_CHANNEL)
            .await?;
        info!(room_id = %room.id, channel_id = %channel.id, "created announcements channel");

        self.chat
            .send_message(&channel.id, &self.intro_message(room))
            .await?;

        self.store
            .attach_room_channels(
                &room.id,
                &RoomChannels {
                    announcements_channel_id: channel.id,
                    newsroom_category_channel_id: category.id,
                },
            )
            .await?;

        Ok(Outcome::Completed)
    }

    fn intro_message(&self, room: &Room) -> String {
        format!(
            "This is the announcements channel for **{}**. \
             New tasks and proposals will be posted here. \
             Use `!task <title>` to create a task, or open {}/rooms/{}",
            room.title,
            self.config.web_app_base_url().trim_end_matches('/'),
            room.id
        )
    }
}
