//! Feed supervision tests: end-to-end through the reactor.

mod common;

use common::{MockChat, configured_room, proposal, task};
use herald_interface::{DocumentStore, FixedCutoff};
use herald_reactor::{FeedKind, ReactionConfig, Reactor};
use herald_store::MemoryStore;
use std::sync::Arc;
use std::time::Duration;

async fn settle() {
    // Feeds and reactions are fire-and-forget; give them a moment.
    tokio::time::sleep(Duration::from_millis(50)).await;
}

fn cutoff() -> FixedCutoff {
    FixedCutoff(chrono::DateTime::UNIX_EPOCH)
}

#[tokio::test]
async fn reacts_to_room_connection_events() {
    let store = Arc::new(MemoryStore::new());
    let chat = Arc::new(MockChat::new().with_guild("g1"));
    store.insert_room(common::room("r1", "Alpha", None)).await;

    let reactor = Reactor::new(
        store.clone(),
        chat.clone(),
        Arc::new(cutoff()),
        ReactionConfig::default(),
    );
    let handle = reactor.spawn().await.unwrap();

    store.connect_room("r1", "g1").await.unwrap();
    settle().await;

    let room = store.room("r1").await.unwrap().unwrap();
    assert!(room.announcements_channel_id.is_some());
    assert_eq!(chat.categories_created(), 1);

    handle.shutdown().await;
}

#[tokio::test]
async fn one_failing_reaction_does_not_stop_the_feed() {
    let store = Arc::new(MemoryStore::new());
    store
        .insert_room(configured_room("r1", "Alpha", "g1", "a1", "c1"))
        .await;
    let chat = Arc::new(
        MockChat::new()
            .with_guild("g1")
            .with_channel("g1", "a1", "newsroom-announcements")
            .with_channel("g1", "c1", "Alpha"),
    );

    let reactor = Reactor::new(
        store.clone(),
        chat.clone(),
        Arc::new(cutoff()),
        ReactionConfig::default(),
    );
    let mut handle = reactor.spawn().await.unwrap();

    // A proposal whose announcements channel is missing forces a failure.
    store
        .insert_room(configured_room("r2", "Beta", "g1", "missing", "c1"))
        .await;
    store.insert_proposal(proposal("p1", "r2", "Broken", 1.0)).await;
    settle().await;

    let failure = handle.failures().try_recv().unwrap();
    assert_eq!(failure.feed, FeedKind::Proposals);
    assert_eq!(failure.document_id, "p1");

    // The feed is still alive and handles the next proposal.
    store.insert_proposal(proposal("p2", "r1", "Works", 2.0)).await;
    settle().await;
    let announced = store.proposal("p2").await.unwrap().unwrap();
    assert!(announced.discord_message_id.is_some());

    handle.shutdown().await;
}

#[tokio::test]
async fn task_events_before_cutoff_are_not_replayed() {
    let store = Arc::new(MemoryStore::new());
    store
        .insert_room(configured_room("r1", "Alpha", "g1", "a1", "c1"))
        .await;
    let chat = Arc::new(
        MockChat::new()
            .with_guild("g1")
            .with_channel("g1", "a1", "newsroom-announcements")
            .with_channel("g1", "c1", "Alpha"),
    );

    // Cutoff after the fixture task's creation time.
    let late_cutoff =
        FixedCutoff(chrono::Utc::now());
    let reactor = Reactor::new(
        store.clone(),
        chat.clone(),
        Arc::new(late_cutoff),
        ReactionConfig::default(),
    );
    let handle = reactor.spawn().await.unwrap();

    store.insert_task(task("t1", "r1", "Old news")).await;
    settle().await;

    let untouched = store.task("t1").await.unwrap().unwrap();
    assert!(untouched.discord_invite_code.is_none());
    assert_eq!(chat.total_calls(), 0);

    handle.shutdown().await;
}

#[tokio::test]
async fn shutdown_stops_the_pumps() {
    let store = Arc::new(MemoryStore::new());
    let chat = Arc::new(MockChat::new());

    let reactor = Reactor::new(
        store.clone(),
        chat.clone(),
        Arc::new(cutoff()),
        ReactionConfig::default(),
    );
    let handle = reactor.spawn().await.unwrap();
    handle.shutdown().await;

    // Events published after shutdown are never handled.
    store.insert_task(task("t1", "r1", "Too late")).await;
    settle().await;
    assert_eq!(chat.total_calls(), 0);
}
