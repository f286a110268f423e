//! Task announcement reaction.

use crate::{Outcome, ReactionConfig, SettingsResolver, SkipReason};
use herald_core::{ChangeEvent, Task, channel_name, is_welcome_task, task_link};
use herald_error::{ChatError, ChatErrorKind, HeraldResult};
use herald_interface::{ChatPlatform, DocumentStore, TaskAnnouncement};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Provisions a per-task channel, announcement messages, and invite link for
/// a newly created task.
///
/// The invite code on the task document is the idempotency key; the derived
/// channel name is deterministic so repeated runs stay debuggable, but it is
/// not relied on for correctness.
pub struct TaskAnnouncedHandler<S, C> {
    store: Arc<S>,
    chat: Arc<C>,
    resolver: SettingsResolver<S>,
    config: Arc<ReactionConfig>,
}

impl<S: DocumentStore, C: ChatPlatform> TaskAnnouncedHandler<S, C> {
    /// Build a handler over the store and chat capabilities.
    pub fn new(store: Arc<S>, chat: Arc<C>, config: Arc<ReactionConfig>) -> Self {
        let resolver = SettingsResolver::new(store.clone(), &config);
        Self {
            store,
            chat,
            resolver,
            config,
        }
    }

    /// Run the reaction for one observed task.
    #[instrument(skip(self, event), fields(task_id = %event.id))]
    pub async fn handle(&self, event: ChangeEvent<Task>) -> HeraldResult<Outcome> {
        let task = &event.document;

        // Guards run in order: no settings, welcome marker, pre-cutoff,
        // already announced. The feed filters on the cutoff too, but the
        // guard holds regardless of which store delivered the event.
        let Some(settings) = self.resolver.resolve(&task.room).await else {
            warn!(task_id = %task.id, room_id = %task.room, "no guild settings, skipping task");
            return Ok(Outcome::Skipped(SkipReason::SettingsUnresolved));
        };

        if is_welcome_task(&task.title, self.config.welcome_task_marker()) {
            debug!(task_id = %task.id, "welcome task, never announced");
            return Ok(Outcome::Skipped(SkipReason::WelcomeTask));
        }

        if task.created <= *self.config.cutoff() {
            debug!(task_id = %task.id, created = %task.created, "task predates cutoff");
            return Ok(Outcome::Skipped(SkipReason::BeforeCutoff));
        }

        if task.is_announced() {
            debug!(task_id = %task.id, "task already announced");
            return Ok(Outcome::Skipped(SkipReason::AlreadyAnnounced));
        }

        let announcements = self
            .chat
            .fetch_channel(&settings.guild_id, &settings.announcements_channel_id)
            .await?
            .ok_or_else(|| {
                ChatError::new(ChatErrorKind::ChannelNotFound(
                    settings.announcements_channel_id.clone(),
                ))
            })?;
        let category = self
            .chat
            .fetch_channel(&settings.guild_id, &settings.newsroom_category_channel_id)
            .await?
            .ok_or_else(|| {
                ChatError::new(ChatErrorKind::ChannelNotFound(
                    settings.newsroom_category_channel_id.clone(),
                ))
            })?;

        let name = channel_name(&settings, &task.room, &task.title);
        let channel = self
            .chat
            .create_text_channel(&settings.guild_id, Some(&category.id), &name)
            .await?;
        info!(task_id = %task.id, channel = %name, "created task channel");

        let link = task_link(self.config.web_app_base_url(), &task.room, &task.id);
        self.chat
            .send_message(&channel.id, &format!("**{}**\n{}", task.title, link))
            .await?;
        self.chat
            .send_message(
                &announcements.id,
                &format!("New task: **{}** {} <#{}>", task.title, link, channel.id),
            )
            .await?;

        let invite = self.chat.create_permanent_invite(&channel.id).await?;

        self.store
            .attach_task_announcement(
                &task.id,
                &TaskAnnouncement {
                    channel_name: name,
                    invite_code: invite.0,
                },
            )
            .await?;

        Ok(Outcome::Completed)
    }
}
