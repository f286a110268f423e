//! Herald - newsroom to Discord automation bridge.
//!
//! Facade crate: re-exports the public surface of the member crates and adds
//! process-level configuration plus the file-backed resume store used by the
//! binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod resume;

pub use config::{DiscordConfig, HeraldConfig, StoreConfig};
pub use resume::FileResumeStore;

pub use herald_core::{
    ChangeEvent, GuildSettings, Proposal, Room, Task, WELCOME_TASK_MARKER, channel_name,
    is_welcome_task, slug, task_creation_link, task_link,
};
pub use herald_discord::DiscordChat;
pub use herald_error::{
    ChatError, ChatErrorKind, ConfigError, ConfigErrorKind, HeraldError, HeraldErrorKind,
    HeraldResult, StoreError, StoreErrorKind,
};
pub use herald_interface::{
    ChannelRef, ChatPlatform, DocumentStore, FixedCutoff, GuildRef, InviteCode, MessageId,
    ResumeStore, RoomChannels, TaskAnnouncement,
};
pub use herald_reactor::{
    DefaultGuild, FeedKind, Outcome, ProposalAnnouncedHandler, ReactionConfig, ReactionFailure,
    Reactor, ReactorHandle, RoomConnectedHandler, SettingsResolver, SkipReason,
    TaskAnnouncedHandler,
};
pub use herald_store::MemoryStore;
