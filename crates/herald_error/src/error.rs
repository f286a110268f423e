//! Top-level error wrapper types.

use crate::{ChatError, ConfigError, StoreError};

/// Union of every Herald domain error.
///
/// # Examples
///
/// ```
/// use herald_error::{ChatError, ChatErrorKind, HeraldError};
///
/// let chat_err = ChatError::new(ChatErrorKind::GuildNotFound("g1".into()));
/// let err: HeraldError = chat_err.into();
/// assert!(format!("{}", err).contains("Guild not found"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum HeraldErrorKind {
    /// Document store error.
    #[from(StoreError)]
    Store(StoreError),
    /// Chat platform error.
    #[from(ChatError)]
    Chat(ChatError),
    /// Configuration error.
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Herald error with kind discrimination.
///
/// # Examples
///
/// ```
/// use herald_error::{ConfigError, ConfigErrorKind, HeraldResult};
///
/// fn might_fail() -> HeraldResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::MissingValue("token".into())))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Herald Error: {}", _0)]
pub struct HeraldError(Box<HeraldErrorKind>);

impl HeraldError {
    /// Create a new error from a kind.
    pub fn new(kind: HeraldErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HeraldErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to HeraldErrorKind
impl<T> From<T> for HeraldError
where
    T: Into<HeraldErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Herald operations.
pub type HeraldResult<T> = std::result::Result<T, HeraldError>;
