//! Public types exposed by the `atmoriver-core` crate.

pub mod event;
pub mod options;
pub mod transaction;

pub use event::{EventDraft, EventDraftBuilder, EventRecord, EventStatus, EventVerdict};
pub use options::LedgerOptions;
pub use transaction::{TxPhase, TxStatus};
