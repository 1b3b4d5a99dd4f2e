//! Simulated sealing of measurement payloads.
//!
//! The transform is a stand-in for real encryption: draft fields are JSON
//! encoded, base64'd, and tagged with a fixed prefix. It offers no
//! confidentiality. The ledger treats sealed payloads as opaque strings and
//! never inspects their content; only the edges of the system (the form that
//! seals, a viewer that unseals) touch these functions.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::{LedgerError, Result};
use crate::types::EventDraft;

/// Tag prepended to every sealed payload.
pub const SEALED_PREFIX: &str = "FHE-";

/// Seal a draft into the opaque payload string stored on the ledger.
pub fn seal_payload(draft: &EventDraft) -> Result<String> {
    let json = serde_json::to_vec(draft)?;
    Ok(format!("{SEALED_PREFIX}{}", STANDARD.encode(json)))
}

/// Recover draft fields from a sealed payload.
pub fn unseal_payload(payload: &str) -> Result<EventDraft> {
    let encoded = payload
        .strip_prefix(SEALED_PREFIX)
        .ok_or(LedgerError::MalformedPayload("missing seal prefix"))?;
    let raw = STANDARD
        .decode(encoded)
        .map_err(|_| LedgerError::MalformedPayload("payload is not valid base64"))?;
    serde_json::from_slice(&raw)
        .map_err(|_| LedgerError::MalformedPayload("sealed fields do not parse"))
}
