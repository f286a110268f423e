//! Change-reaction orchestration core.
//!
//! The reactor observes "newly added" documents on the store's change feeds
//! and runs one bounded reaction per event: provisioning Discord categories,
//! channels, announcement messages, and invites, then writing the generated
//! identifiers back so the reaction never repeats.
//!
//! Three reactions exist, one per document type:
//! - [`RoomConnectedHandler`] provisions a category plus announcements
//!   channel when a room first links to a guild.
//! - [`TaskAnnouncedHandler`] provisions a per-task channel, announcement
//!   messages, and a non-expiring invite.
//! - [`ProposalAnnouncedHandler`] posts a funding-proposal announcement,
//!   optionally routed to the proposal's workstream channel.
//!
//! Each handler starts with idempotency guards that read current document
//! state; guard rejections are expected steady state and surface as
//! [`Outcome::Skipped`], never as errors. The [`Reactor`] supervises the
//! feeds: every event is dispatched as an independently tracked task whose
//! failure is reported on a structured channel without stopping the feed.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod handlers;
mod outcome;
mod reactor;
mod settings;

pub use config::{DefaultGuild, ReactionConfig};
pub use handlers::{ProposalAnnouncedHandler, RoomConnectedHandler, TaskAnnouncedHandler};
pub use outcome::{Outcome, SkipReason};
pub use reactor::{FeedKind, ReactionFailure, Reactor, ReactorHandle};
pub use settings::SettingsResolver;
