//! Core data types for the Herald automation bridge.
//!
//! Herald watches a newsroom document database and provisions Discord
//! resources in response. This crate holds the storage-agnostic document
//! snapshots (rooms, tasks, proposals), the resolved guild settings view,
//! and the pure helpers shared by every reaction: channel-name slugging and
//! task-creation deep links.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod document;
mod link;
mod naming;
mod settings;

pub use document::{ChangeEvent, Proposal, Room, Task};
pub use link::{task_creation_link, task_link};
pub use naming::{WELCOME_TASK_MARKER, channel_name, is_welcome_task, slug};
pub use settings::GuildSettings;
