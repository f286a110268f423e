//! Reaction configuration.
//!
//! The original deployment scattered its policy across environment flags
//! (default guild ids, a verified-only toggle, divergent variant behavior).
//! [`ReactionConfig`] collects all of it into one struct with explicit
//! precedence: per-room settings win over the default guild, and resolution
//! aborts when neither exists.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use herald_core::{GuildSettings, WELCOME_TASK_MARKER};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Catch-all destination for rooms without per-room channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct DefaultGuild {
    /// Guild id.
    #[builder(setter(into))]
    guild_id: String,
    /// Shared announcements channel id.
    #[builder(setter(into))]
    announcements_channel_id: String,
    /// Category id task channels are created under.
    #[builder(setter(into))]
    newsroom_category_channel_id: String,
}

impl DefaultGuild {
    /// View as resolved settings; the catch-all always prefixes room names.
    pub fn settings(&self) -> GuildSettings {
        GuildSettings::fallback(
            &self.guild_id,
            &self.announcements_channel_id,
            &self.newsroom_category_channel_id,
        )
    }
}

/// Policy knobs for the three reactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct ReactionConfig {
    /// Catch-all guild for rooms without per-room settings. Absent means
    /// resolution fails for unconfigured rooms and their reactions abort.
    #[builder(default)]
    #[serde(default)]
    default_guild: Option<DefaultGuild>,

    /// Only announce proposals that passed verification.
    #[builder(default = default_require_verified())]
    #[serde(default = "default_require_verified")]
    require_verified_proposals: bool,

    /// Route proposal announcements into the workstream task's channel when
    /// the proposal carries a workstream id. The announcements channel is
    /// used when the target channel cannot be found.
    #[builder(default)]
    #[serde(default)]
    route_workstream_proposals: bool,

    /// Documents created at or before this point are never replayed. Used as
    /// the resume position when no recorded position exists.
    #[builder(default = default_cutoff())]
    #[serde(default = "default_cutoff")]
    cutoff: DateTime<Utc>,

    /// Base URL of the newsroom web application, for deep links.
    #[builder(default = default_web_app_base_url(), setter(into))]
    #[serde(default = "default_web_app_base_url")]
    web_app_base_url: String,

    /// Title prefix marking seeded welcome tasks, which are never announced.
    #[builder(default = default_welcome_marker(), setter(into))]
    #[serde(default = "default_welcome_marker")]
    welcome_task_marker: String,
}

fn default_require_verified() -> bool {
    true
}

fn default_cutoff() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

fn default_web_app_base_url() -> String {
    "https://newsroom.app".to_string()
}

fn default_welcome_marker() -> String {
    WELCOME_TASK_MARKER.to_string()
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self {
            default_guild: None,
            require_verified_proposals: default_require_verified(),
            route_workstream_proposals: false,
            cutoff: default_cutoff(),
            web_app_base_url: default_web_app_base_url(),
            welcome_task_marker: default_welcome_marker(),
        }
    }
}

impl ReactionConfig {
    /// Resolved settings for the catch-all guild, if one is configured.
    pub fn default_settings(&self) -> Option<GuildSettings> {
        self.default_guild.as_ref().map(DefaultGuild::settings)
    }
}
