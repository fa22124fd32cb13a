/// Result of a remote confirmation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationOutcome {
    /// The remote side accepted the value; it becomes the confirmed value.
    Accepted,
    /// The remote side (or the transport) declined the value.
    Rejected(String),
}

impl ConfirmationOutcome {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// How a single `apply` call ended, from the point of view of its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The value was accepted and is now confirmed.
    Committed,
    /// The value was rejected and the display reverted to the prior confirmed value.
    Reverted { reason: String },
    /// A newer operation started before this one resolved; its outcome was discarded.
    Superseded,
    /// The confirmation task never produced an outcome (panicked or the runtime shut down).
    ///
    /// The value stays in flight until the next `apply` or `reset`.
    Abandoned { reason: String },
}

impl Resolution {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed)
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }
}

/// Published on a controller's error channel whenever an operation reverts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Label of the controller that reverted (e.g. "reflection[3]").
    pub label: String,
    /// Generation of the reverted operation.
    pub generation: u64,
    pub reason: String,
}
