//! In-memory document store with live change feeds.
//!
//! [`MemoryStore`] backs every test suite and the demo deployment of the
//! binary. Documents live in `RwLock`-guarded maps; each collection carries a
//! broadcast channel that publishes an append-only change feed. Insert-style
//! mutations publish; update-style mutations never do, matching the
//! append-only semantics of the production subscription.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod memory;

pub use memory::MemoryStore;
