//! Wallet account session shared with the view layer.

use tokio::sync::watch;

use crate::types::EventRecord;

/// Currently connected wallet account, plus a change-notification stream.
///
/// The address is an opaque string; empty means disconnected. Ownership
/// checks here are advisory only; the contract's signed write path is the
/// actual authority on whether a write lands.
#[derive(Debug)]
pub struct AccountSession {
    tx: watch::Sender<String>,
}

impl Default for AccountSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountSession {
    /// Start disconnected.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(String::new());
        Self { tx }
    }

    /// Record a wallet connection or account switch.
    pub fn connect(&self, address: impl Into<String>) {
        self.tx.send_replace(address.into());
    }

    pub fn disconnect(&self) {
        self.tx.send_replace(String::new());
    }

    /// The connected address, or empty when disconnected.
    #[must_use]
    pub fn current(&self) -> String {
        self.tx.borrow().clone()
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        !self.tx.borrow().is_empty()
    }

    /// Subscribe to account changes (connects, switches, disconnects).
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }

    /// Whether the connected account owns `record` (case-insensitive).
    #[must_use]
    pub fn owns(&self, record: &EventRecord) -> bool {
        record.is_owned_by(&self.tx.borrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventStatus;

    fn record_owned_by(owner: &str) -> EventRecord {
        EventRecord {
            id: "1-a".into(),
            payload: String::new(),
            created_at: 0,
            owner: owner.into(),
            region: String::new(),
            intensity: 1,
            status: EventStatus::Pending,
        }
    }

    #[tokio::test]
    async fn connect_switch_disconnect() {
        let session = AccountSession::new();
        assert!(!session.is_connected());

        let mut changes = session.subscribe();

        session.connect("0xAA");
        assert_eq!(session.current(), "0xAA");
        changes.changed().await.expect("change notification");
        assert_eq!(*changes.borrow_and_update(), "0xAA");

        session.connect("0xBB");
        changes.changed().await.expect("switch notification");
        assert_eq!(*changes.borrow_and_update(), "0xBB");

        session.disconnect();
        assert!(!session.is_connected());
    }

    #[tokio::test]
    async fn ownership_tracks_current_account() {
        let session = AccountSession::new();
        let record = record_owned_by("0xAbCd");

        assert!(!session.owns(&record));
        session.connect("0xABCD");
        assert!(session.owns(&record));
        session.connect("0xEE");
        assert!(!session.owns(&record));
    }
}
