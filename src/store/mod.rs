//! Remote key-value store boundary.
//!
//! The ledger talks to an external append-only key-value contract through
//! this trait: an unauthenticated read path (`get_data`) and an
//! authenticated, wallet-signed write path (`set_data`). Values are opaque
//! byte blobs addressed by string keys.

mod memory;

pub use memory::InMemoryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Failures raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend cannot be reached at all.
    #[error("store backend unavailable")]
    Unavailable,

    /// The signer declined to authorize a write.
    #[error("user rejected transaction")]
    Rejected,

    /// Any other transport or backend failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Asynchronous interface to the remote ledger contract.
///
/// Every method suspends the caller until the remote call settles; whether a
/// call ever times out is the backend's business, not the ledger's. An empty
/// blob from `get_data` means the key was never written; absence is not an
/// error on this interface.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Liveness probe, checked before every synchronization pass.
    async fn is_available(&self) -> Result<bool, StoreError>;

    /// Read the blob stored under `key`; empty means not found.
    async fn get_data(&self, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Write `value` under `key`, suspending until the write is acknowledged.
    async fn set_data(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;
}
