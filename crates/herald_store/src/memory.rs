//! RwLock-map store with broadcast-backed change feeds.

use async_stream::stream;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use herald_core::{ChangeEvent, Proposal, Room, Task};
use herald_error::{StoreError, StoreErrorKind, StoreResult};
use herald_interface::{ChangeStream, DocumentStore, RoomChannels, TaskAnnouncement};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{RwLock, broadcast};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tracing::warn;

const FEED_CAPACITY: usize = 256;

/// In-memory [`DocumentStore`] implementation.
///
/// Suitable as a test double and as a standalone demo backend. Not durable.
pub struct MemoryStore {
    rooms: RwLock<HashMap<String, Room>>,
    tasks: RwLock<HashMap<String, Task>>,
    proposals: RwLock<HashMap<String, Proposal>>,
    room_feed: broadcast::Sender<ChangeEvent<Room>>,
    task_feed: broadcast::Sender<ChangeEvent<Task>>,
    proposal_feed: broadcast::Sender<ChangeEvent<Proposal>>,
    writes: AtomicUsize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        let (room_feed, _) = broadcast::channel(FEED_CAPACITY);
        let (task_feed, _) = broadcast::channel(FEED_CAPACITY);
        let (proposal_feed, _) = broadcast::channel(FEED_CAPACITY);
        Self {
            rooms: RwLock::new(HashMap::new()),
            tasks: RwLock::new(HashMap::new()),
            proposals: RwLock::new(HashMap::new()),
            room_feed,
            task_feed,
            proposal_feed,
            writes: AtomicUsize::new(0),
        }
    }

    /// Insert a room without publishing a connection event.
    pub async fn insert_room(&self, room: Room) {
        self.rooms.write().await.insert(room.id.clone(), room);
    }

    /// Insert a task and publish it on the task feed.
    pub async fn insert_task(&self, task: Task) {
        self.tasks.write().await.insert(task.id.clone(), task.clone());
        // Send fails only when no subscriber exists, which is fine.
        let _ = self.task_feed.send(ChangeEvent {
            id: task.id.clone(),
            document: task,
        });
    }

    /// Insert a proposal and publish it on the proposal feed.
    pub async fn insert_proposal(&self, proposal: Proposal) {
        self.proposals
            .write()
            .await
            .insert(proposal.id.clone(), proposal.clone());
        let _ = self.proposal_feed.send(ChangeEvent {
            id: proposal.id.clone(),
            document: proposal,
        });
    }

    /// Attach a guild id to a room and publish the connection event.
    ///
    /// Mirrors the production feed's definition of "added": a room entering
    /// the guild-linked query result set for the first time.
    pub async fn connect_room(&self, room_id: &str, guild_id: &str) -> StoreResult<()> {
        let mut rooms = self.rooms.write().await;
        let room = rooms.get_mut(room_id).ok_or_else(|| {
            StoreError::new(StoreErrorKind::NotFound {
                collection: "rooms",
                id: room_id.to_string(),
            })
        })?;
        let already_linked = room.guild_id.is_some();
        room.guild_id = Some(guild_id.to_string());
        let event = ChangeEvent {
            id: room.id.clone(),
            document: room.clone(),
        };
        drop(rooms);
        if !already_linked {
            let _ = self.room_feed.send(event);
        }
        Ok(())
    }

    /// Number of update-style writes performed against the store.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn feed_stream<T: Clone + Send + 'static>(
        rx: broadcast::Receiver<ChangeEvent<T>>,
        keep: impl Fn(&ChangeEvent<T>) -> bool + Send + 'static,
    ) -> ChangeStream<T> {
        let mut inner = BroadcastStream::new(rx);
        Box::pin(stream! {
            while let Some(item) = inner.next().await {
                match item {
                    Ok(event) if keep(&event) => yield event,
                    Ok(_) => {}
                    Err(e) => {
                        // Lagged receiver: skipped events are lost, the feed
                        // itself continues.
                        warn!(error = %e, "change feed lagged");
                    }
                }
            }
        })
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn room(&self, id: &str) -> StoreResult<Option<Room>> {
        Ok(self.rooms.read().await.get(id).cloned())
    }

    async fn task(&self, id: &str) -> StoreResult<Option<Task>> {
        Ok(self.tasks.read().await.get(id).cloned())
    }

    async fn proposal(&self, id: &str) -> StoreResult<Option<Proposal>> {
        Ok(self.proposals.read().await.get(id).cloned())
    }

    async fn find_task_by_workstream(&self, workstream_id: &str) -> StoreResult<Option<Task>> {
        Ok(self
            .tasks
            .read()
            .await
            .values()
            .find(|t| t.id == workstream_id)
            .cloned())
    }

    async fn attach_room_channels(
        &self,
        room_id: &str,
        channels: &RoomChannels,
    ) -> StoreResult<()> {
        let mut rooms = self.rooms.write().await;
        let room = rooms.get_mut(room_id).ok_or_else(|| {
            StoreError::new(StoreErrorKind::NotFound {
                collection: "rooms",
                id: room_id.to_string(),
            })
        })?;
        room.announcements_channel_id = Some(channels.announcements_channel_id.clone());
        room.newsroom_category_channel_id = Some(channels.newsroom_category_channel_id.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn attach_task_announcement(
        &self,
        task_id: &str,
        announcement: &TaskAnnouncement,
    ) -> StoreResult<()> {
        let mut tasks = self.tasks.write().await;
        let task = tasks.get_mut(task_id).ok_or_else(|| {
            StoreError::new(StoreErrorKind::NotFound {
                collection: "tasks",
                id: task_id.to_string(),
            })
        })?;
        task.discord_channel_name = Some(announcement.channel_name.clone());
        task.discord_invite_code = Some(announcement.invite_code.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn attach_proposal_message(
        &self,
        proposal_id: &str,
        message_id: &str,
    ) -> StoreResult<()> {
        let mut proposals = self.proposals.write().await;
        let proposal = proposals.get_mut(proposal_id).ok_or_else(|| {
            StoreError::new(StoreErrorKind::NotFound {
                collection: "proposals",
                id: proposal_id.to_string(),
            })
        })?;
        proposal.discord_message_id = Some(message_id.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn subscribe_room_connections(
        &self,
        _since: DateTime<Utc>,
    ) -> StoreResult<ChangeStream<Room>> {
        // Rooms carry no creation timestamp; the feed is live-only, so the
        // resume position is vacuous here.
        Ok(Self::feed_stream(self.room_feed.subscribe(), |_| true))
    }

    async fn subscribe_new_tasks(&self, since: DateTime<Utc>) -> StoreResult<ChangeStream<Task>> {
        Ok(Self::feed_stream(self.task_feed.subscribe(), move |e| {
            e.document.created > since
        }))
    }

    async fn subscribe_new_proposals(
        &self,
        since: DateTime<Utc>,
    ) -> StoreResult<ChangeStream<Proposal>> {
        Ok(Self::feed_stream(self.proposal_feed.subscribe(), move |e| {
            e.document.created > since
        }))
    }
}
