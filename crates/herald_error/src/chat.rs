//! Chat platform error types.
//!
//! Covers Discord API failures surfaced through the `ChatPlatform`
//! capability: missing guilds/channels, send failures, invite failures, and
//! malformed snowflake ids.

/// Chat platform error variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ChatErrorKind {
    /// Platform API error (HTTP error, gateway error, rate limit).
    #[display("Platform API error: {_0}")]
    ApiError(String),

    /// Guild (server) not found by id.
    #[display("Guild not found: {_0}")]
    GuildNotFound(String),

    /// Channel not found by id.
    #[display("Channel not found: {_0}")]
    ChannelNotFound(String),

    /// Channel creation failed.
    #[display("Channel create failed: {_0}")]
    ChannelCreateFailed(String),

    /// Message failed to send.
    #[display("Message send failed: {_0}")]
    MessageSendFailed(String),

    /// Invite creation failed.
    #[display("Invite create failed: {_0}")]
    InviteCreateFailed(String),

    /// Invalid platform snowflake id format.
    #[display("Invalid id: {_0}")]
    InvalidId(String),

    /// Connection to the platform failed.
    #[display("Connection failed: {_0}")]
    ConnectionFailed(String),
}

/// Chat platform error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Chat Error: {} at {}:{}", kind, file, line)]
pub struct ChatError {
    kind: ChatErrorKind,
    line: u32,
    file: &'static str,
}

impl ChatError {
    /// Create a new ChatError with automatic location capture.
    #[track_caller]
    pub fn new(kind: ChatErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ChatErrorKind {
        &self.kind
    }
}

/// Result type for chat platform operations.
pub type ChatResult<T> = Result<T, ChatError>;

#[cfg(feature = "discord")]
impl From<serenity::Error> for ChatError {
    #[track_caller]
    fn from(err: serenity::Error) -> Self {
        ChatError::new(ChatErrorKind::ApiError(err.to_string()))
    }
}
