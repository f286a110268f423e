//! Process configuration.

use herald_error::{ConfigError, ConfigErrorKind, HeraldResult};
use herald_reactor::ReactionConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for the Herald binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeraldConfig {
    /// Document store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Discord settings.
    #[serde(default)]
    pub discord: DiscordConfig,
    /// Reaction policy.
    #[serde(default)]
    pub reactions: ReactionConfig,
}

impl HeraldConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> HeraldResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(ConfigErrorKind::ReadFailed(format!(
                "{}: {}",
                path.as_ref().display(),
                e
            )))
        })?;
        Ok(toml::from_str(&content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::ParseFailed(e.to_string())))?)
    }
}

/// Document store settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the resume-position file. Absent means positions are not
    /// persisted and every start falls back to the configured cutoff.
    #[serde(default)]
    pub resume_path: Option<PathBuf>,
}

/// Discord settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Bot token. Usually left unset here and supplied via `DISCORD_TOKEN`.
    #[serde(default)]
    pub token: Option<String>,
}
