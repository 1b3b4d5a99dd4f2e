//! Submission and status transitions for individual events.
//!
//! Every public write operation settles the transaction tracker (pending →
//! success/error) whichever way the store call goes; errors are returned to
//! the caller as well, but never bypass the tracker. None of these methods
//! re-sync the record list; callers invoke `refresh` afterwards to observe
//! their own write.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use tracing::instrument;

use crate::codec;
use crate::constants::{ID_SUFFIX_LEN, record_key};
use crate::error::{LedgerError, Result};
use crate::ledger::EventLedger;
use crate::seal;
use crate::store::{RemoteStore, StoreError};
use crate::types::{EventDraft, EventRecord, EventStatus, EventVerdict};

impl<S: RemoteStore> EventLedger<S> {
    /// Seal and submit a new event as `acting_as`, returning the fresh id.
    ///
    /// The record blob is written before its index entry so the index never
    /// references an unwritten record; a crash between the two steps leaves
    /// an orphaned blob that no refresh will surface.
    #[instrument(skip(self, draft), fields(region = %draft.region))]
    pub async fn submit_event(&mut self, draft: EventDraft, acting_as: &str) -> Result<String> {
        self.tracker.begin("Encrypting atmospheric data with FHE...");
        match self.submit_inner(draft, acting_as).await {
            Ok(id) => {
                self.tracker
                    .succeed("Encrypted atmospheric data submitted securely!");
                Ok(id)
            }
            Err(err) => {
                self.tracker.fail(submit_failure_message(&err));
                Err(err)
            }
        }
    }

    async fn submit_inner(&mut self, draft: EventDraft, acting_as: &str) -> Result<String> {
        draft.validate()?;
        let payload = seal::seal_payload(&draft)?;
        let id = generate_event_id();
        let record = EventRecord {
            id: id.clone(),
            payload,
            created_at: unix_now(),
            owner: acting_as.to_string(),
            region: draft.region,
            intensity: draft.intensity,
            status: EventStatus::Pending,
        };
        self.store
            .set_data(&record_key(&id), codec::encode_record(&record)?)
            .await?;
        self.append_index(&id).await?;
        Ok(id)
    }

    /// Mark a pending event analyzed. See [`EventLedger::transition_event`].
    pub async fn analyze_event(&mut self, id: &str, acting_as: &str) -> Result<()> {
        self.transition_event(id, EventVerdict::Analyzed, acting_as).await
    }

    /// Mark a pending event rejected. See [`EventLedger::transition_event`].
    pub async fn reject_event(&mut self, id: &str, acting_as: &str) -> Result<()> {
        self.transition_event(id, EventVerdict::Rejected, acting_as).await
    }

    /// Apply a terminal verdict to a pending event.
    ///
    /// Fails with [`LedgerError::NotFound`] when no blob exists at `id` and
    /// [`LedgerError::InvalidTransition`] when the event already settled.
    /// On success the full blob is rewritten with the new status; all other
    /// fields are preserved and the index is untouched (membership does not
    /// depend on status).
    ///
    /// `acting_as` is advisory: callers are expected to have checked
    /// `record.owner` before offering the action, and nothing here
    /// re-verifies it.
    #[instrument(skip(self))]
    pub async fn transition_event(
        &mut self,
        id: &str,
        verdict: EventVerdict,
        acting_as: &str,
    ) -> Result<()> {
        self.tracker
            .begin("Processing encrypted atmospheric data with FHE...");
        match self.transition_inner(id, verdict).await {
            Ok(()) => {
                self.tracker.succeed(verdict.success_message());
                Ok(())
            }
            Err(err) => {
                self.tracker.fail(transition_failure_message(verdict, &err));
                Err(err)
            }
        }
    }

    async fn transition_inner(&mut self, id: &str, verdict: EventVerdict) -> Result<()> {
        let record = self
            .fetch_record(id)
            .await?
            .ok_or_else(|| LedgerError::NotFound { id: id.to_string() })?;
        if record.status != EventStatus::Pending {
            return Err(LedgerError::InvalidTransition {
                id: id.to_string(),
                status: record.status,
            });
        }
        let updated = EventRecord { status: verdict.status(), ..record };
        self.store
            .set_data(&record_key(id), codec::encode_record(&updated)?)
            .await?;
        Ok(())
    }
}

/// Seconds since the epoch; pre-epoch clocks clamp to zero.
pub(crate) fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Millisecond timestamp plus a random base-36 suffix. Matches the id format
/// of records already on the ledger.
pub(crate) fn generate_event_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect();
    format!("{millis}-{suffix}")
}

fn submit_failure_message(err: &LedgerError) -> String {
    match err {
        LedgerError::Store(StoreError::Rejected) => "Transaction rejected by user".to_string(),
        other => format!("Submission failed: {other}"),
    }
}

fn transition_failure_message(verdict: EventVerdict, err: &LedgerError) -> String {
    if matches!(err, LedgerError::Store(StoreError::Rejected)) {
        return "Transaction rejected by user".to_string();
    }
    format!("{} failed: {err}", verdict.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_timestamp_and_suffix() {
        let id = generate_event_id();
        let (millis, suffix) = id.split_once('-').expect("separator");
        assert!(millis.parse::<u128>().is_ok());
        assert_eq!(suffix.len(), ID_SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn generated_ids_do_not_collide_cheaply() {
        let a = generate_event_id();
        let b = generate_event_id();
        assert_ne!(a, b);
    }

    #[test]
    fn rejection_gets_its_own_message() {
        let err = LedgerError::Store(StoreError::Rejected);
        assert_eq!(submit_failure_message(&err), "Transaction rejected by user");
        assert_eq!(
            transition_failure_message(EventVerdict::Analyzed, &err),
            "Transaction rejected by user"
        );
    }

    #[test]
    fn other_failures_carry_the_underlying_message() {
        let err = LedgerError::Store(StoreError::Backend("rpc timeout".into()));
        assert_eq!(
            submit_failure_message(&err),
            "Submission failed: store backend error: rpc timeout"
        );
        assert_eq!(
            transition_failure_message(EventVerdict::Rejected, &err),
            "Rejection failed: store backend error: rpc timeout"
        );
    }
}
