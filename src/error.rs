//! Crate-wide error and result types.

use thiserror::Error;

use crate::store::StoreError;
use crate::types::EventStatus;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Failures surfaced by the event ledger client.
///
/// Refresh-time decode failures (`CorruptRecord`, malformed index blobs) are
/// contained inside the synchronizer and never escape it; write-path errors
/// always settle the transaction tracker in addition to being returned.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A record blob failed to decode. Treated as a per-record soft failure
    /// during refresh: skipped and logged, never fatal to the batch.
    #[error("record {id} is corrupt: {reason}")]
    CorruptRecord { id: String, reason: String },

    /// No record blob exists at the target id.
    #[error("event {id} not found")]
    NotFound { id: String },

    /// The target record already settled; both terminal states admit no
    /// further transitions.
    #[error("event {id} is already {status}; only pending events can change state")]
    InvalidTransition { id: String, status: EventStatus },

    /// A draft failed validation before anything was written.
    #[error("invalid event draft: {0}")]
    InvalidDraft(&'static str),

    /// A sealed payload did not carry the expected prefix or encoding.
    #[error("sealed payload is malformed: {0}")]
    MalformedPayload(&'static str),

    /// Encode-side serialization failure.
    #[error("payload serialization failed: {0}")]
    Codec(#[from] serde_json::Error),

    /// The store backend reported a failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
