//! Synchronization of the in-memory record list with the remote ledger.

use tracing::{debug, instrument, warn};

use crate::codec;
use crate::constants::record_key;
use crate::error::Result;
use crate::ledger::EventLedger;
use crate::store::RemoteStore;
use crate::types::EventRecord;

/// Result of one refresh pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The record list was rebuilt from the remote ledger.
    Refreshed(SyncStats),
    /// The liveness probe failed; the previous list was left untouched.
    Unavailable,
}

/// Counts from a completed refresh pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Records decoded and loaded into the list.
    pub loaded: usize,
    /// Indexed ids skipped over transport errors, corrupt blobs, or missing blobs.
    pub skipped: usize,
}

impl<S: RemoteStore> EventLedger<S> {
    /// Rebuild the in-memory record list from the remote ledger.
    ///
    /// Probes liveness first: an unavailable store aborts the pass and keeps
    /// the previous list (stale but available). Per-id fetch and decode
    /// failures are logged and skipped; one bad record never aborts the
    /// batch. The surviving records are sorted newest-first (stable, so
    /// equal timestamps keep index order) and swapped in wholesale.
    ///
    /// Idempotent and safe to call repeatedly. Overlapping invocations are
    /// not coordinated here; callers serialize refreshes themselves (the
    /// view layer's busy flag).
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<SyncOutcome> {
        match self.store.is_available().await {
            Ok(true) => {}
            Ok(false) => {
                warn!("store liveness probe returned false; keeping previous records");
                return Ok(SyncOutcome::Unavailable);
            }
            Err(err) => {
                warn!(%err, "store liveness probe failed; keeping previous records");
                return Ok(SyncOutcome::Unavailable);
            }
        }

        let ids = self.read_index().await?;
        let mut list: Vec<EventRecord> = Vec::with_capacity(ids.len());
        let mut skipped = 0usize;

        for id in &ids {
            match self.fetch_record(id).await {
                Ok(Some(record)) => list.push(record),
                Ok(None) => {
                    // Indexed id with no blob: an orphan from an interrupted
                    // submit. Invisible, not an error.
                    debug!(id, "indexed id has no record blob; skipping");
                    skipped += 1;
                }
                Err(err) => {
                    warn!(id, %err, "failed to load record; skipping");
                    skipped += 1;
                }
            }
        }

        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let stats = SyncStats { loaded: list.len(), skipped };
        self.records = list;
        debug!(loaded = stats.loaded, skipped = stats.skipped, "refresh complete");
        Ok(SyncOutcome::Refreshed(stats))
    }

    /// Fetch and decode one record; `None` when no blob exists at the id.
    pub(crate) async fn fetch_record(&self, id: &str) -> Result<Option<EventRecord>> {
        let raw = self.store.get_data(&record_key(id)).await?;
        if raw.is_empty() {
            return Ok(None);
        }
        Ok(Some(codec::decode_record(id, &raw)?))
    }
}
