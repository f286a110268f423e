//! Error types for the Herald automation bridge.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! The top-level [`HeraldError`] collects every domain error behind a single
//! `From`-friendly enum, so handler code can propagate with `?` regardless of
//! which capability failed.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chat;
mod config;
mod error;
mod store;

pub use chat::{ChatError, ChatErrorKind, ChatResult};
pub use config::{ConfigError, ConfigErrorKind, ConfigResult};
pub use error::{HeraldError, HeraldErrorKind, HeraldResult};
pub use store::{StoreError, StoreErrorKind, StoreResult};
