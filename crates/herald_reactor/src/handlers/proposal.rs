//! Proposal announcement reaction.

use crate::{Outcome, ReactionConfig, SettingsResolver, SkipReason};
use herald_core::{ChangeEvent, GuildSettings, Proposal};
use herald_error::{ChatError, ChatErrorKind, HeraldResult};
use herald_interface::{ChannelRef, ChatPlatform, DocumentStore};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Posts a funding-proposal announcement and persists the message id.
///
/// When workstream routing is enabled and the proposal targets a workstream,
/// the announcement goes to that task's channel instead of the shared
/// announcements channel. The workstream association alone does not
/// guarantee the target channel exists, so a failed lookup falls back to the
/// announcements channel rather than aborting.
pub struct ProposalAnnouncedHandler<S, C> {
    store: Arc<S>,
    chat: Arc<C>,
    resolver: SettingsResolver<S>,
    config: Arc<ReactionConfig>,
}

impl<S: DocumentStore, C: ChatPlatform> ProposalAnnouncedHandler<S, C> {
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

    /// Run the reaction for one observed proposal.
    #[instrument(skip(self, event), fields(proposal_id = %event.id))]
    pub async fn handle(&self, event: ChangeEvent<Proposal>) -> HeraldResult<Outcome> {
        let proposal = &event.document;

        let Some(settings) = self.resolver.resolve(&proposal.room).await else {
            warn!(
                proposal_id = %proposal.id,
                room_id = %proposal.room,
                "no guild settings, skipping proposal"
            );
            return Ok(Outcome::Skipped(SkipReason::SettingsUnresolved));
        };

        if *self.config.require_verified_proposals() && !proposal.verified {
            debug!(proposal_id = %proposal.id, "proposal not verified");
            return Ok(Outcome::Skipped(SkipReason::Unverified));
        }

        if proposal.is_announced() {
            debug!(proposal_id = %proposal.id, "proposal already announced");
            return Ok(Outcome::Skipped(SkipReason::AlreadyAnnounced));
        }

        let target = self.target_channel(proposal, &settings).await?;
        let text = format!(
            "New proposal: **{}** requesting {} in room {}",
            proposal.title, proposal.amount, proposal.room
        );
        let message = self.chat.send_message(&target.id, &text).await?;

        self.store
            .attach_proposal_message(&proposal.id, &message.0)
            .await?;

        Ok(Outcome::Completed)
    }

    /// Pick the destination channel: the workstream task's channel when
    /// routing applies and the channel exists, otherwise announcements.
    async fn target_channel(
        &self,
        proposal: &Proposal,
        settings: &GuildSettings,
    ) -> HeraldResult<ChannelRef> {
        if *self.config.route_workstream_proposals()
            && let Some(workstream_id) = proposal.workstream_id.as_deref()
            && let Some(task) = self.store.find_task_by_workstream(workstream_id).await?
            && let Some(channel_name) = task.discord_channel_name.as_deref()
            && let Some(channel) = self
                .chat
                .find_channel_by_name(&settings.guild_id, channel_name)
                .await?
        {
            debug!(proposal_id = %proposal.id, channel = %channel.name, "routing to workstream channel");
            return Ok(channel);
        }

        self.chat
            .fetch_channel(&settings.guild_id, &settings.announcements_channel_id)
            .await?
            .ok_or_else(|| {
                ChatError::new(ChatErrorKind::ChannelNotFound(
                    settings.announcements_channel_id.clone(),
                ))
                .into()
            })
    }
}
