//! Discord HTTP client wrapper.

use async_trait::async_trait;
use herald_error::{ChatError, ChatErrorKind, ChatResult};
use herald_interface::{ChannelRef, ChatPlatform, GuildRef, InviteCode, MessageId};
use serenity::builder::{CreateChannel, CreateInvite, CreateMessage};
use serenity::http::{Http, HttpError, StatusCode};
use serenity::model::channel::ChannelType;
use serenity::model::id::{ChannelId, GuildId};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Discord implementation of the chat platform capability.
///
/// Wraps serenity's HTTP client; reads go straight to the API so each
/// reaction observes current platform state.
pub struct DiscordChat {
    http: Arc<Http>,
}

impl DiscordChat {
    /// Build a client from a bot token.
    ///
    /// # Errors
    /// Returns an error when the token is empty.
    pub fn new(token: &str) -> ChatResult<Self> {
        if token.is_empty() {
            return Err(ChatError::new(ChatErrorKind::ConnectionFailed(
                "Discord token cannot be empty".to_string(),
            )));
        }
        Ok(Self {
            http: Arc::new(Http::new(token)),
        })
    }

    /// Wrap an existing serenity HTTP client.
    pub fn from_http(http: Arc<Http>) -> Self {
        Self { http }
    }

    fn guild_id(id: &str) -> ChatResult<GuildId> {
        match id.parse::<u64>() {
            Ok(n) if n != 0 => Ok(GuildId::new(n)),
            _ => Err(ChatError::new(ChatErrorKind::InvalidId(id.to_string()))),
        }
    }

    fn channel_id(id: &str) -> ChatResult<ChannelId> {
        match id.parse::<u64>() {
            Ok(n) if n != 0 => Ok(ChannelId::new(n)),
            _ => Err(ChatError::new(ChatErrorKind::InvalidId(id.to_string()))),
        }
    }
}


fn is_not_found(err: &serenity::Error) -> bool {
    matches!(
        err,
        serenity::Error::Http(HttpError::UnsuccessfulRequest(resp))
            if resp.status_code == StatusCode::NOT_FOUND
    )
}

#[async_trait]
impl ChatPlatform for DiscordChat {
    #[instrument(skip(self))]
    async fn guild(&self, guild_id: &str) -> ChatResult<Option<GuildRef>> {
        let id = Self::guild_id(guild_id)?;
        match self.http.get_guild(id).await {
            Ok(guild) => Ok(Some(GuildRef {
                id: guild.id.to_string(),
                name: guild.name,
            })),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    async fn create_category(&self, guild_id: &str, name: &str) -> ChatResult<ChannelRef> {
        let id = Self::guild_id(guild_id)?;
        let channel = id
            .create_channel(
                &*self.http,
                CreateChannel::new(name).kind(ChannelType::Category),
            )
            .await
            .map_err(|e| {
                ChatError::new(ChatErrorKind::ChannelCreateFailed(format!(
                    "category {name:?}: {e}"
                )))
            })?;
        debug!(category_id = %channel.id, "created category");
        Ok(ChannelRef {
            id: channel.id.to_string(),
            name: channel.name,
        })
    }

    #[instrument(skip(self))]
    async fn create_text_channel(
        &self,
        guild_id: &str,
        category_id: Option<&str>,
        name: &str,
    ) -> ChatResult<ChannelRef> {
        let id = Self::guild_id(guild_id)?;
        let mut builder = CreateChannel::new(name).kind(ChannelType::Text);
        if let Some(category) = category_id {
            builder = builder.category(Self::channel_id(category)?);
        }
        let channel = id.create_channel(&*self.http, builder).await.map_err(|e| {
            ChatError::new(ChatErrorKind::ChannelCreateFailed(format!(
                "channel {name:?}: {e}"
            )))
        })?;
        debug!(channel_id = %channel.id, "created text channel");
        Ok(ChannelRef {
            id: channel.id.to_string(),
            name: channel.name,
        })
    }

    #[instrument(skip(self, text))]
    async fn send_message(&self, channel_id: &str, text: &str) -> ChatResult<MessageId> {
        let id = Self::channel_id(channel_id)?;
        let message = id
            .send_message(&*self.http, CreateMessage::new().content(text))
            .await
            .map_err(|e| ChatError::new(ChatErrorKind::MessageSendFailed(e.to_string())))?;
        Ok(MessageId(message.id.to_string()))
    }

    #[instrument(skip(self))]
    async fn create_permanent_invite(&self, channel_id: &str) -> ChatResult<InviteCode> {
        let id = Self::channel_id(channel_id)?;
        let invite = id
            .create_invite(&*self.http, CreateInvite::new().max_age(0).max_uses(0))
            .await
            .map_err(|e| ChatError::new(ChatErrorKind::InviteCreateFailed(e.to_string())))?;
        Ok(InviteCode(invite.code))
    }

    #[instrument(skip(self))]
    async fn fetch_channel(
        &self,
        guild_id: &str,
        channel_id: &str,
    ) -> ChatResult<Option<ChannelRef>> {
        let guild = Self::guild_id(guild_id)?;
        let id = Self::channel_id(channel_id)?;
        match self.http.get_channel(id).await {
            Ok(channel) => Ok(channel
                .guild()
                .filter(|c| c.guild_id == guild)
                .map(|c| ChannelRef {
                    id: c.id.to_string(),
                    name: c.name,
                })),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    async fn find_channel_by_name(
        &self,
        guild_id: &str,
        name: &str,
    ) -> ChatResult<Option<ChannelRef>> {
        let guild = Self::guild_id(guild_id)?;
        let channels = self
            .http
            .get_channels(guild)
            .await
            .map_err(ChatError::from)?;
        Ok(channels
            .into_iter()
            .find(|c| c.name == name)
            .map(|c| ChannelRef {
                id: c.id.to_string(),
                name: c.name,
            }))
    }
}
