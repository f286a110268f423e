//! Chat platform capability.

use crate::{ChannelRef, GuildRef, InviteCode, MessageId};
use async_trait::async_trait;
use herald_error::ChatResult;

/// The chat platform Herald provisions resources on.
///
/// Methods map one-to-one onto the platform CRUD calls the reactions need.
/// Implementations may serve reads from a local cache refreshed by explicit
/// fetches; Herald never caches across reactions itself.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Resolve a guild by id. `None` when the bot is not a member.
    async fn guild(&self, guild_id: &str) -> ChatResult<Option<GuildRef>>;

    /// Create a category-like grouping container within a guild.
    async fn create_category(&self, guild_id: &str, name: &str) -> ChatResult<ChannelRef>;

    /// Create a text channel, optionally parented under a category.
    async fn create_text_channel(
        &self,
        guild_id: &str,
        category_id: Option<&str>,
        name: &str,
    ) -> ChatResult<ChannelRef>;

    /// Post a message into a channel.
    async fn send_message(&self, channel_id: &str, text: &str) -> ChatResult<MessageId>;

    /// Create a non-expiring invite for a channel.
    async fn create_permanent_invite(&self, channel_id: &str) -> ChatResult<InviteCode>;

    /// Fetch a channel by id within a guild. `None` when it does not exist.
    async fn fetch_channel(&self, guild_id: &str, channel_id: &str)
    -> ChatResult<Option<ChannelRef>>;

    /// Find a channel by exact name within a guild.
    async fn find_channel_by_name(&self, guild_id: &str, name: &str)
    -> ChatResult<Option<ChannelRef>>;
}
