//! Document store error types.

/// Document store error variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StoreErrorKind {
    /// Document not found by id in the named collection.
    #[display("Document not found: {collection}/{id}")]
    NotFound {
        /// Collection the lookup targeted.
        collection: &'static str,
        /// Document id.
        id: String,
    },

    /// Write was rejected by the backing store.
    #[display("Write failed: {_0}")]
    WriteFailed(String),

    /// Subscription to a change feed could not be established or was lost.
    #[display("Subscription failed: {_0}")]
    SubscriptionFailed(String),

    /// Transient I/O failure talking to the store.
    #[display("Store I/O error: {_0}")]
    Io(String),
}

/// Document store error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at {}:{}", kind, file, line)]
pub struct StoreError {
    kind: StoreErrorKind,
    line: u32,
    file: &'static str,
}

impl StoreError {
    /// Create a new StoreError with automatic location capture.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoreErrorKind {
        &self.kind
    }
}

/// Result type for document store operations.
pub type StoreResult<T> = Result<T, StoreError>;
