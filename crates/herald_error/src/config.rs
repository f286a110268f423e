//! Configuration error types.

/// Configuration error variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Configuration file could not be read.
    #[display("Read failed: {_0}")]
    ReadFailed(String),

    /// Configuration file could not be parsed.
    #[display("Parse failed: {_0}")]
    ParseFailed(String),

    /// A required value is absent from every source.
    #[display("Missing value: {_0}")]
    MissingValue(String),
}

/// Configuration error with source location tracking.
///
/// # Examples
///
/// ```
/// use herald_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingValue("discord token".into()));
/// assert!(format!("{}", err).contains("discord token"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location capture.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
