//! Shared fixtures: a call-counting mock chat platform and document builders.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use herald_core::{Proposal, Room, Task};
use herald_error::{ChatError, ChatErrorKind, ChatResult};
use herald_interface::{ChannelRef, ChatPlatform, GuildRef, InviteCode, MessageId};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Mock chat platform recording every call.
#[derive(Default)]
pub struct MockChat {
    guilds: Mutex<Vec<String>>,
    channels: Mutex<Vec<(String, ChannelRef)>>,
    next_id: AtomicU64,
    calls: AtomicUsize,
    categories_created: AtomicUsize,
    channels_created: AtomicUsize,
    messages_sent: AtomicUsize,
    invites_created: AtomicUsize,
    pub sent: Mutex<Vec<(String, String)>>,
    fail_channel_create: std::sync::atomic::AtomicBool,
}

impl MockChat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guild(self, guild_id: &str) -> Self {
        self.guilds.lock().unwrap().push(guild_id.to_string());
        self
    }

    /// Pre-register an existing channel, as if created out of band.
    pub fn with_channel(self, guild_id: &str, channel_id: &str, name: &str) -> Self {
        self.channels.lock().unwrap().push((
            guild_id.to_string(),
            ChannelRef {
                id: channel_id.to_string(),
                name: name.to_string(),
            },
        ));
        self
    }

    pub fn with_channel_create_failure(self) -> Self {
        self.fail_channel_create.store(true, Ordering::SeqCst);
        self
    }

    pub fn total_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn categories_created(&self) -> usize {
        self.categories_created.load(Ordering::SeqCst)
    }

    pub fn channels_created(&self) -> usize {
        self.channels_created.load(Ordering::SeqCst)
    }

    pub fn messages_sent(&self) -> usize {
        self.messages_sent.load(Ordering::SeqCst)
    }

    pub fn invites_created(&self) -> usize {
        self.invites_created.load(Ordering::SeqCst)
    }

    /// Name of the most recently created channel.
    pub fn last_created_channel(&self) -> Option<ChannelRef> {
        self.channels.lock().unwrap().last().map(|(_, c)| c.clone())
    }

    fn fresh_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

#[async_trait]
impl ChatPlatform for MockChat {
    async fn guild(&self, guild_id: &str) -> ChatResult<Option<GuildRef>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .guilds
            .lock()
            .unwrap()
            .iter()
            .find(|g| *g == guild_id)
            .map(|g| GuildRef {
                id: g.clone(),
                name: format!("guild {g}"),
            }))
    }

    async fn create_category(&self, guild_id: &str, name: &str) -> ChatResult<ChannelRef> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.categories_created.fetch_add(1, Ordering::SeqCst);
        let category = ChannelRef {
            id: self.fresh_id("cat"),
            name: name.to_string(),
        };
        self.channels
            .lock()
            .unwrap()
            .push((guild_id.to_string(), category.clone()));
        Ok(category)
    }

    async fn create_text_channel(
        &self,
        guild_id: &str,
        _category_id: Option<&str>,
        name: &str,
    ) -> ChatResult<ChannelRef> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_channel_create.load(Ordering::SeqCst) {
            return Err(ChatError::new(ChatErrorKind::ChannelCreateFailed(
                "mock failure".to_string(),
            )));
        }
        self.channels_created.fetch_add(1, Ordering::SeqCst);
        let channel = ChannelRef {
            id: self.fresh_id("chan"),
            name: name.to_string(),
        };
        self.channels
            .lock()
            .unwrap()
            .push((guild_id.to_string(), channel.clone()));
        Ok(channel)
    }

    async fn send_message(&self, channel_id: &str, text: &str) -> ChatResult<MessageId> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.messages_sent.fetch_add(1, Ordering::SeqCst);
        self.sent
            .lock()
            .unwrap()
            .push((channel_id.to_string(), text.to_string()));
        Ok(MessageId(self.fresh_id("msg")))
    }

    async fn create_permanent_invite(&self, _channel_id: &str) -> ChatResult<InviteCode> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.invites_created.fetch_add(1, Ordering::SeqCst);
        Ok(InviteCode(self.fresh_id("inv")))
    }

    async fn fetch_channel(
        &self,
        guild_id: &str,
        channel_id: &str,
    ) -> ChatResult<Option<ChannelRef>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .channels
            .lock()
            .unwrap()
            .iter()
            .find(|(g, c)| g == guild_id && c.id == channel_id)
            .map(|(_, c)| c.clone()))
    }

    async fn find_channel_by_name(
        &self,
        guild_id: &str,
        name: &str,
    ) -> ChatResult<Option<ChannelRef>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .channels
            .lock()
            .unwrap()
            .iter()
            .find(|(g, c)| g == guild_id && c.name == name)
            .map(|(_, c)| c.clone()))
    }
}

pub fn room(id: &str, title: &str, guild_id: Option<&str>) -> Room {
    Room {
        id: id.to_string(),
        title: title.to_string(),
        guild_id: guild_id.map(str::to_string),
        announcements_channel_id: None,
        newsroom_category_channel_id: None,
    }
}

pub fn configured_room(id: &str, title: &str, guild: &str, announcements: &str, category: &str) -> Room {
    Room {
        id: id.to_string(),
        title: title.to_string(),
        guild_id: Some(guild.to_string()),
        announcements_channel_id: Some(announcements.to_string()),
        newsroom_category_channel_id: Some(category.to_string()),
    }
}

pub fn task(id: &str, room: &str, title: &str) -> Task {
    Task {
        id: id.to_string(),
        room: room.to_string(),
        title: title.to_string(),
        created: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        discord_channel_name: None,
        discord_invite_code: None,
    }
}

pub fn proposal(id: &str, room: &str, title: &str, amount: f64) -> Proposal {
    Proposal {
        id: id.to_string(),
        room: room.to_string(),
        title: title.to_string(),
        amount,
        created: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        verified: true,
        workstream_id: None,
        discord_message_id: None,
    }
}
