//! In-memory store backend for tests and local development.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{RemoteStore, StoreError};

/// Process-local [`RemoteStore`] with fault injection.
///
/// Stands in for the remote contract in tests and local development. The
/// injectable faults mirror the contract's real failure modes: a dead
/// backend, per-key read errors, and a signer declining one write.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    cells: Mutex<HashMap<String, Vec<u8>>>,
    unavailable: AtomicBool,
    reject_next_write: AtomicBool,
    read_faults: Mutex<HashSet<String>>,
}

fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the liveness probe (and all reads/writes with it).
    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    /// Make every read of `key` fail with a backend error until cleared.
    pub fn fail_reads_for(&self, key: &str) {
        guard(&self.read_faults).insert(key.to_string());
    }

    /// Clear all injected read faults.
    pub fn clear_read_faults(&self) {
        guard(&self.read_faults).clear();
    }

    /// Fail the next `set_data` call as if the signer declined it.
    pub fn reject_next_write(&self) {
        self.reject_next_write.store(true, Ordering::SeqCst);
    }

    /// Snapshot of a cell, bypassing fault injection.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        guard(&self.cells).get(key).cloned()
    }

    /// Direct write into a cell, bypassing the signing path. Lets tests play
    /// the part of a concurrent writer or seed corrupt blobs.
    pub fn put_raw(&self, key: &str, value: Vec<u8>) {
        guard(&self.cells).insert(key.to_string(), value);
    }
}

#[async_trait]
impl RemoteStore for InMemoryStore {
    async fn is_available(&self) -> Result<bool, StoreError> {
        Ok(!self.unavailable.load(Ordering::SeqCst))
    }

    async fn get_data(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        if guard(&self.read_faults).contains(key) {
            return Err(StoreError::Backend(format!("injected read fault for {key}")));
        }
        Ok(guard(&self.cells).get(key).cloned().unwrap_or_default())
    }

    async fn set_data(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        if self.reject_next_write.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Rejected);
        }
        guard(&self.cells).insert(key.to_string(), value);
        Ok(())
    }
}
