//! Tunable options for the event ledger client.

use std::time::Duration;

use crate::constants::{ERROR_GRACE_MS, SUCCESS_GRACE_MS};

/// Timing knobs for the transaction status display.
///
/// The defaults match the grace periods users of existing clients already
/// see; deployments embedding the core elsewhere can stretch or shrink them.
#[derive(Debug, Clone)]
pub struct LedgerOptions {
    /// How long a success status stays visible before auto-clearing.
    pub success_grace: Duration,
    /// How long an error status stays visible before auto-clearing.
    pub error_grace: Duration,
}

impl Default for LedgerOptions {
    fn default() -> Self {
        Self {
            success_grace: Duration::from_millis(SUCCESS_GRACE_MS),
            error_grace: Duration::from_millis(ERROR_GRACE_MS),
        }
    }
}
