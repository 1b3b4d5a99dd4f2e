//! Core `EventLedger` type orchestrating record synchronization and lifecycle.

pub mod index;
pub mod lifecycle;
pub mod query;
pub mod status;
pub mod sync;

pub use query::{EventFilter, EventPage, LedgerStats};
pub use status::TransactionTracker;
pub use sync::{SyncOutcome, SyncStats};

use tokio::sync::watch;

use crate::store::RemoteStore;
use crate::types::{EventRecord, LedgerOptions, TxStatus};

/// Client-side handle over the remote event ledger.
///
/// Owns the single in-memory copy of the record list and the transaction
/// status tracker for in-flight writes. The list is only ever replaced
/// wholesale by [`EventLedger::refresh`]; consumers never observe a
/// partially rebuilt list. It is deliberately not a cache: the remote
/// store stays the sole source of truth between refreshes. One instance per
/// client session.
pub struct EventLedger<S> {
    pub(crate) store: S,
    pub(crate) options: LedgerOptions,
    pub(crate) records: Vec<EventRecord>,
    pub(crate) tracker: TransactionTracker,
}

impl<S: RemoteStore> EventLedger<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_options(store, LedgerOptions::default())
    }

    #[must_use]
    pub fn with_options(store: S, options: LedgerOptions) -> Self {
        let tracker = TransactionTracker::new(options.success_grace, options.error_grace);
        Self { store, options, records: Vec::new(), tracker }
    }

    /// Records loaded by the most recent successful refresh, newest first.
    #[must_use]
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Current status of the in-flight (or just settled) write operation.
    #[must_use]
    pub fn tx_status(&self) -> TxStatus {
        self.tracker.current()
    }

    /// Subscribe to transaction status changes.
    #[must_use]
    pub fn subscribe_tx_status(&self) -> watch::Receiver<TxStatus> {
        self.tracker.subscribe()
    }

    #[must_use]
    pub fn options(&self) -> &LedgerOptions {
        &self.options
    }

    /// Borrow the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
