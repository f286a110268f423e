//! Capability traits for the Herald automation bridge.
//!
//! Herald's reaction core never talks to Firestore or Discord directly; it
//! calls the capability traits defined here. Production wires in the
//! serenity-backed chat platform and a real store, tests substitute fakes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chat;
mod resume;
mod store;
mod types;

pub use chat::ChatPlatform;
pub use resume::{FixedCutoff, ResumeStore};
pub use store::{ChangeStream, DocumentStore};
pub use types::{ChannelRef, GuildRef, InviteCode, MessageId, RoomChannels, TaskAnnouncement};
