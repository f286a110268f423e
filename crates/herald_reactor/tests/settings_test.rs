//! Guild settings resolution tests.

mod common;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::configured_room;
use herald_core::{Proposal, Room, Task};
use herald_error::{StoreError, StoreErrorKind, StoreResult};
use herald_interface::{ChangeStream, DocumentStore, RoomChannels, TaskAnnouncement};
use herald_reactor::{DefaultGuild, ReactionConfig, SettingsResolver};
use herald_store::MemoryStore;
use std::sync::Arc;

fn config_with_default() -> ReactionConfig {
    ReactionConfig::builder()
        .default_guild(Some(
            DefaultGuild::builder()
                .guild_id("shared")
                .announcements_channel_id("a9")
                .newsroom_category_channel_id("c9")
                .build(),
        ))
        .build()
}

#[tokio::test]
async fn fully_configured_room_wins_over_default() {
    let store = Arc::new(MemoryStore::new());
    store
        .insert_room(configured_room("r1", "Alpha", "g1", "a1", "c1"))
        .await;
    let resolver = SettingsResolver::new(store, &config_with_default());

    let settings = resolver.resolve("r1").await.unwrap();
    assert_eq!(settings.guild_id, "g1");
    assert!(!settings.prepend_room_name);
}

#[tokio::test]
async fn partially_configured_room_falls_back_to_default() {
    let store = Arc::new(MemoryStore::new());
    store.insert_room(common::room("r1", "Alpha", Some("g1"))).await;
    let resolver = SettingsResolver::new(store, &config_with_default());

    let settings = resolver.resolve("r1").await.unwrap();
    assert_eq!(settings.guild_id, "shared");
    assert!(settings.prepend_room_name);
}

#[tokio::test]
async fn missing_room_without_default_resolves_to_none() {
    let store = Arc::new(MemoryStore::new());
    let resolver = SettingsResolver::new(store, &ReactionConfig::default());

    assert!(resolver.resolve("ghost").await.is_none());
}

/// Store whose room lookups always fail.
struct BrokenStore;

#[async_trait]
impl DocumentStore for BrokenStore {
    async fn room(&self, _id: &str) -> StoreResult<Option<Room>> {
        Err(StoreError::new(StoreErrorKind::Io("connection reset".to_string())))
    }

    async fn task(&self, _id: &str) -> StoreResult<Option<Task>> {
        Ok(None)
    }

    async fn proposal(&self, _id: &str) -> StoreResult<Option<Proposal>> {
        Ok(None)
    }

    async fn find_task_by_workstream(&self, _workstream_id: &str) -> StoreResult<Option<Task>> {
        Ok(None)
    }

    async fn attach_room_channels(
        &self,
        _room_id: &str,
        _channels: &RoomChannels,
    ) -> StoreResult<()> {
        Ok(())
    }

    async fn attach_task_announcement(
        &self,
        _task_id: &str,
        _announcement: &TaskAnnouncement,
    ) -> StoreResult<()> {
        Ok(())
    }

    async fn attach_proposal_message(
        &self,
        _proposal_id: &str,
        _message_id: &str,
    ) -> StoreResult<()> {
        Ok(())
    }

    async fn subscribe_room_connections(
        &self,
        _since: DateTime<Utc>,
    ) -> StoreResult<ChangeStream<Room>> {
        Ok(Box::pin(futures_util::stream::empty()))
    }

    async fn subscribe_new_tasks(&self, _since: DateTime<Utc>) -> StoreResult<ChangeStream<Task>> {
        Ok(Box::pin(futures_util::stream::empty()))
    }

    async fn subscribe_new_proposals(
        &self,
        _since: DateTime<Utc>,
    ) -> StoreResult<ChangeStream<Proposal>> {
        Ok(Box::pin(futures_util::stream::empty()))
    }
}

#[tokio::test]
async fn lookup_errors_are_treated_as_absent() {
    // With a default configured the fallback applies; the error never
    // propagates.
    let resolver = SettingsResolver::new(Arc::new(BrokenStore), &config_with_default());
    let settings = resolver.resolve("r1").await.unwrap();
    assert_eq!(settings.guild_id, "shared");

    // Without one, resolution yields absent.
    let resolver = SettingsResolver::new(Arc::new(BrokenStore), &ReactionConfig::default());
    assert!(resolver.resolve("r1").await.is_none());
}
