//! File-backed resume positions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use herald_error::{StoreError, StoreErrorKind, StoreResult};
use herald_interface::ResumeStore;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// Resume store persisting positions to a JSON file.
///
/// Feed name to timestamp, rewritten on every record. Progress is lost only
/// if the file is deleted, which restores the original
/// cutoff-at-deploy-time behavior.
pub struct FileResumeStore {
    path: PathBuf,
    positions: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl FileResumeStore {
    /// Open the store, loading any existing positions.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let positions = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| StoreError::new(StoreErrorKind::Io(e.to_string())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(StoreError::new(StoreErrorKind::Io(e.to_string()))),
        };
        Ok(Self {
            path,
            positions: Mutex::new(positions),
        })
    }
}

#[async_trait]
impl ResumeStore for FileResumeStore {
    async fn load(&self, feed: &str) -> StoreResult<Option<DateTime<Utc>>> {
        Ok(self.positions.lock().await.get(feed).copied())
    }

    async fn record(&self, feed: &str, position: DateTime<Utc>) -> StoreResult<()> {
        let mut positions = self.positions.lock().await;
        // Never move a position backwards; events may complete out of order.
        let entry = positions.entry(feed.to_string()).or_insert(position);
        if position > *entry {
            *entry = position;
        }
        let json = serde_json::to_string_pretty(&*positions)
            .map_err(|e| StoreError::new(StoreErrorKind::Io(e.to_string())))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| StoreError::new(StoreErrorKind::Io(e.to_string())))?;
        Ok(())
    }
}
