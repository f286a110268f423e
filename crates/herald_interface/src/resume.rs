//! Resume position capability for change feeds.
//!
//! The original deployment baked the cutoff in at deploy time, which meant a
//! restart between deploys silently changed which documents were eligible.
//! The resume position is pluggable instead: the reactor loads it per feed at
//! start and records progress as events are handled.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use herald_error::StoreResult;

/// Loads and records per-feed resume positions.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Last recorded position for a feed, if any.
    async fn load(&self, feed: &str) -> StoreResult<Option<DateTime<Utc>>>;

    /// Record the creation timestamp of the latest handled event.
    async fn record(&self, feed: &str, position: DateTime<Utc>) -> StoreResult<()>;
}

/// Deploy-time-constant resume position.
///
/// Always yields the fixed cutoff and records nothing. Retains the original
/// system's behavior for deployments that do not persist progress.
#[derive(Debug, Clone, Copy)]
pub struct FixedCutoff(pub DateTime<Utc>);

#[async_trait]
impl ResumeStore for FixedCutoff {
    async fn load(&self, _feed: &str) -> StoreResult<Option<DateTime<Utc>>> {
        Ok(Some(self.0))
    }

    async fn record(&self, _feed: &str, _position: DateTime<Utc>) -> StoreResult<()> {
        Ok(())
    }
}
