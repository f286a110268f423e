//! Reaction outcomes.

/// Result of one reaction that ran to its decision point without failing.
///
/// Guard rejections are expected steady state (most observed documents have
/// already been processed), so they are outcomes rather than errors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Outcome {
    /// All side effects performed and identifiers persisted.
    #[display("completed")]
    Completed,

    /// An idempotency guard or eligibility check rejected the document.
    #[display("skipped: {_0}")]
    Skipped(SkipReason),
}

impl Outcome {
    /// Whether the reaction performed its side effects.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Why a reaction declined to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SkipReason {
    /// Room already has its announcements channel.
    #[display("room already connected")]
    AlreadyConnected,

    /// Task or proposal already carries its announcement identifier.
    #[display("already announced")]
    AlreadyAnnounced,

    /// Task title carries the reserved welcome marker.
    #[display("welcome task")]
    WelcomeTask,

    /// Document predates the replay cutoff.
    #[display("created before cutoff")]
    BeforeCutoff,

    /// Proposal has not passed verification.
    #[display("proposal not verified")]
    Unverified,

    /// Neither per-room nor default guild settings could be resolved.
    #[display("settings unresolved")]
    SettingsUnresolved,

    /// Room event arrived without a guild link.
    #[display("room has no guild link")]
    MissingGuildLink,
}
