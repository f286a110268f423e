//! Document store capability.

use crate::{RoomChannels, TaskAnnouncement};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::stream::Stream;
use herald_core::{ChangeEvent, Proposal, Room, Task};
use herald_error::StoreResult;
use std::pin::Pin;

/// Lazy, infinite sequence of newly added documents.
pub type ChangeStream<T> = Pin<Box<dyn Stream<Item = ChangeEvent<T>> + Send>>;

/// The document database behind Herald.
///
/// Subscriptions surface only "added" transitions (a document entering the
/// observed query result set). Edits and deletions are never delivered; the
/// system is append-only reactive. `since` is the resume position: documents
/// created before it are not replayed on (re)start.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a room by id.
    async fn room(&self, id: &str) -> StoreResult<Option<Room>>;

    /// Fetch a task by id.
    async fn task(&self, id: &str) -> StoreResult<Option<Task>>;

    /// Fetch a proposal by id.
    async fn proposal(&self, id: &str) -> StoreResult<Option<Proposal>>;

    /// Find the task linked to a workstream id, for routed proposal
    /// announcements.
    async fn find_task_by_workstream(&self, workstream_id: &str) -> StoreResult<Option<Task>>;

    /// Persist the provisioned channel ids onto a room.
    ///
    /// Called exactly once per room, after both chat resources are confirmed
    /// created.
    async fn attach_room_channels(&self, room_id: &str, channels: &RoomChannels)
    -> StoreResult<()>;

    /// Persist the announcement identifiers onto a task.
    async fn attach_task_announcement(
        &self,
        task_id: &str,
        announcement: &TaskAnnouncement,
    ) -> StoreResult<()>;

    /// Persist the posted message id onto a proposal.
    async fn attach_proposal_message(&self, proposal_id: &str, message_id: &str)
    -> StoreResult<()>;

    /// Subscribe to rooms acquiring a guild id (first connection).
    async fn subscribe_room_connections(&self, since: DateTime<Utc>)
    -> StoreResult<ChangeStream<Room>>;

    /// Subscribe to newly created tasks.
    async fn subscribe_new_tasks(&self, since: DateTime<Utc>) -> StoreResult<ChangeStream<Task>>;

    /// Subscribe to newly created proposals.
    async fn subscribe_new_proposals(
        &self,
        since: DateTime<Utc>,
    ) -> StoreResult<ChangeStream<Proposal>>;
}
