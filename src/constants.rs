//! Well-known store keys and timing constants.
//!
//! The key literals are part of the on-ledger format: changing either one
//! orphans every record written by existing clients.

/// Store key holding the ordered set of all known event ids.
pub const EVENT_INDEX_KEY: &str = "event_keys";

/// Prefix joined with an event id to form that event's record key.
pub const EVENT_KEY_PREFIX: &str = "event_";

/// How long a successful transaction status stays visible before auto-clearing.
pub const SUCCESS_GRACE_MS: u64 = 2_000;

/// How long a failed transaction status stays visible before auto-clearing.
pub const ERROR_GRACE_MS: u64 = 3_000;

/// Length of the random base-36 suffix appended to generated event ids.
pub(crate) const ID_SUFFIX_LEN: usize = 7;

/// Store key for the record blob of event `id`.
#[must_use]
pub fn record_key(id: &str) -> String {
    format!("{EVENT_KEY_PREFIX}{id}")
}
