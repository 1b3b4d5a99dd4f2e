//! Pure serialization of records and the id index. No I/O.
//!
//! Blob layouts match what existing clients already wrote: records are JSON
//! objects carrying `data`/`timestamp`/`owner`/`region`/`intensity`/`status`,
//! the index is a bare JSON array of id strings. Decoding is lenient where
//! ledger history demands it (absent status field, malformed index blob) and
//! strict where skipping is the right recovery (corrupt record blobs).

use std::collections::HashSet;

use tracing::warn;

use crate::error::{LedgerError, Result};
use crate::types::EventRecord;

/// Serialize a record into its on-ledger blob. The id is carried by the
/// record key, not the blob.
pub fn encode_record(record: &EventRecord) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(record)?)
}

/// Decode a record blob fetched from under `id`'s key.
///
/// Fails with [`LedgerError::CorruptRecord`]; refresh callers treat that as
/// a per-record soft failure (skip and log), never a fatal abort.
pub fn decode_record(id: &str, raw: &[u8]) -> Result<EventRecord> {
    let mut record: EventRecord =
        serde_json::from_slice(raw).map_err(|err| LedgerError::CorruptRecord {
            id: id.to_string(),
            reason: err.to_string(),
        })?;
    record.id = id.to_string();
    Ok(record)
}

/// Serialize the id index into its on-ledger blob.
pub fn encode_index(ids: &[String]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(ids)?)
}

/// Decode the id index blob.
///
/// Empty or malformed blobs decode to the empty set ("no index yet" is not
/// an error). Duplicate ids keep their first position so the result stays an
/// ordered set.
#[must_use]
pub fn decode_index(raw: &[u8]) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    let ids: Vec<String> = match serde_json::from_slice(raw) {
        Ok(ids) => ids,
        Err(err) => {
            warn!(%err, "event index blob is malformed; treating as empty");
            return Vec::new();
        }
    };
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
