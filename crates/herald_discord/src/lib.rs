//! Serenity-backed [`ChatPlatform`] implementation.
//!
//! Herald only needs Discord's HTTP API: channel and category creation,
//! message posting, and invite creation. No gateway connection is held; the
//! reactor is driven by the document store's change feeds, not by Discord
//! events.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chat;

pub use chat::DiscordChat;
