#![deny(clippy::all, clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![allow(clippy::module_name_repetitions)]
//
// Strategic lint exceptions - these are allowed project-wide for pragmatic reasons:
//
// Documentation lints: Many internal/self-documenting functions don't need extensive docs.
// Public APIs should still have proper documentation.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
//
// Cast safety: casts here are bounded by real-world constraints (epoch seconds,
// list lengths); try_into() everywhere would add complexity without safety benefit.
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
//
// Return value wrapping: Some codec functions use Result for consistency even when a
// given input cannot currently fail, allowing future error conditions without breaking API.
#![allow(clippy::unnecessary_wraps)]
//
// Builder patterns don't need must_use on every method.
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::map_unwrap_or)]

/// The atmoriver-core crate version (matches `Cargo.toml`).
pub const ATMORIVER_CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod account;
pub mod codec;
pub mod constants;
pub mod error;
pub mod ledger;
pub mod seal;
pub mod store;
pub mod types;

pub use account::AccountSession;
pub use codec::{decode_index, decode_record, encode_index, encode_record};
pub use constants::{
    ERROR_GRACE_MS, EVENT_INDEX_KEY, EVENT_KEY_PREFIX, SUCCESS_GRACE_MS, record_key,
};
pub use error::{LedgerError, Result};
pub use ledger::{
    EventFilter, EventLedger, EventPage, LedgerStats, SyncOutcome, SyncStats, TransactionTracker,
};
pub use seal::{SEALED_PREFIX, seal_payload, unseal_payload};
pub use store::{InMemoryStore, RemoteStore, StoreError};
pub use types::{
    EventDraft, EventDraftBuilder, EventRecord, EventStatus, EventVerdict, LedgerOptions, TxPhase,
    TxStatus,
};
