//! Transaction status values surfaced to the view layer.

/// Phase of one in-flight write operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TxPhase {
    /// No operation in flight; nothing to display.
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

/// Ephemeral status of one submitted write operation.
///
/// Never persisted; lives only in process memory for the duration of the
/// operation plus the display grace period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxStatus {
    pub phase: TxPhase,
    pub message: String,
}

impl TxStatus {
    pub(crate) fn idle() -> Self {
        Self::default()
    }

    pub(crate) fn pending(message: impl Into<String>) -> Self {
        Self { phase: TxPhase::Pending, message: message.into() }
    }

    pub(crate) fn success(message: impl Into<String>) -> Self {
        Self { phase: TxPhase::Success, message: message.into() }
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self { phase: TxPhase::Error, message: message.into() }
    }

    /// Whether the view layer should render this status at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != TxPhase::Idle
    }
}
