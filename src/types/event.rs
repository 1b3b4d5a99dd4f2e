//! Event records, lifecycle status, and submission drafts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

/// One atmospheric event entry in the ledger.
///
/// The serde layout matches the on-ledger JSON blob exactly: fields `data`,
/// `timestamp`, `owner`, `region`, `intensity`, `status`. The id travels in
/// the record key, not the blob, and is filled in by the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Ledger-unique identifier; never reused, never mutated.
    #[serde(skip)]
    pub id: String,
    /// Sealed measurement payload. Opaque to the ledger; nothing in this
    /// crate inspects sealed content.
    #[serde(rename = "data")]
    pub payload: String,
    /// Seconds since the epoch, set once at creation.
    #[serde(rename = "timestamp")]
    pub created_at: i64,
    /// Address of the creating account.
    pub owner: String,
    /// Free-text category; no edit operation exists.
    pub region: String,
    /// Client-supplied severity, nominally 1..=10.
    pub intensity: u8,
    /// Older blobs carry no status field and decode as pending.
    #[serde(default)]
    pub status: EventStatus,
}

impl EventRecord {
    /// Case-insensitive ownership check. The view layer runs this before
    /// offering lifecycle actions; the ledger itself does not re-verify.
    #[must_use]
    pub fn is_owned_by(&self, address: &str) -> bool {
        !address.is_empty() && self.owner.eq_ignore_ascii_case(address)
    }
}

/// Lifecycle status of an event record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Pending,
    Analyzed,
    Rejected,
}

impl EventStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Analyzed => "analyzed",
            Self::Rejected => "rejected",
        }
    }

    /// Terminal states admit no further transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reviewer verdict applied to a pending event. Both outcomes are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventVerdict {
    Analyzed,
    Rejected,
}

impl EventVerdict {
    /// The status a record settles into under this verdict.
    #[must_use]
    pub fn status(self) -> EventStatus {
        match self {
            Self::Analyzed => EventStatus::Analyzed,
            Self::Rejected => EventStatus::Rejected,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Analyzed => "Analysis",
            Self::Rejected => "Rejection",
        }
    }

    pub(crate) fn success_message(self) -> &'static str {
        match self {
            Self::Analyzed => "FHE analysis completed successfully!",
            Self::Rejected => "FHE rejection completed successfully!",
        }
    }
}

/// Draft of a new event as captured by the submission form.
///
/// The serde names match the sealed payload's JSON fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub region: String,
    pub intensity: u8,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "encryptedMeasurements")]
    pub encrypted_measurements: String,
}

impl EventDraft {
    /// Start a fluent builder for `EventDraft`.
    #[must_use]
    pub fn builder() -> EventDraftBuilder {
        EventDraftBuilder::default()
    }

    /// Check the draft before submission: region and measurements are
    /// required, intensity must stay within 1..=10.
    pub fn validate(&self) -> Result<()> {
        if self.region.trim().is_empty() {
            return Err(LedgerError::InvalidDraft("region is required"));
        }
        if self.encrypted_measurements.trim().is_empty() {
            return Err(LedgerError::InvalidDraft("measurements are required"));
        }
        if !(1..=10).contains(&self.intensity) {
            return Err(LedgerError::InvalidDraft("intensity must be between 1 and 10"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventDraftBuilder {
    inner: EventDraft,
}

impl EventDraftBuilder {
    pub fn region<S: Into<String>>(mut self, region: S) -> Self {
        self.inner.region = region.into();
        self
    }

    #[must_use]
    pub fn intensity(mut self, intensity: u8) -> Self {
        self.inner.intensity = intensity;
        self
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.inner.description = description.into();
        self
    }

    pub fn measurements<S: Into<String>>(mut self, measurements: S) -> Self {
        self.inner.encrypted_measurements = measurements.into();
        self
    }

    #[must_use]
    pub fn build(self) -> EventDraft {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EventDraft {
        EventDraft::builder()
            .region("North Pacific")
            .intensity(5)
            .measurements("abc")
            .build()
    }

    #[test]
    fn ownership_check_is_case_insensitive() {
        let record = EventRecord {
            id: "1-a".into(),
            payload: String::new(),
            created_at: 0,
            owner: "0xAbCd".into(),
            region: String::new(),
            intensity: 1,
            status: EventStatus::Pending,
        };
        assert!(record.is_owned_by("0xabcd"));
        assert!(record.is_owned_by("0xABCD"));
        assert!(!record.is_owned_by("0xabce"));
        assert!(!record.is_owned_by(""));
    }

    #[test]
    fn draft_validation_requires_region_and_measurements() {
        assert!(draft().validate().is_ok());

        let mut missing_region = draft();
        missing_region.region = "  ".into();
        assert!(matches!(
            missing_region.validate(),
            Err(LedgerError::InvalidDraft("region is required"))
        ));

        let mut missing_measurements = draft();
        missing_measurements.encrypted_measurements = String::new();
        assert!(matches!(
            missing_measurements.validate(),
            Err(LedgerError::InvalidDraft("measurements are required"))
        ));
    }

    #[test]
    fn draft_validation_bounds_intensity() {
        let mut low = draft();
        low.intensity = 0;
        assert!(low.validate().is_err());

        let mut high = draft();
        high.intensity = 11;
        assert!(high.validate().is_err());

        let mut max = draft();
        max.intensity = 10;
        assert!(max.validate().is_ok());
    }

    #[test]
    fn terminal_states() {
        assert!(!EventStatus::Pending.is_terminal());
        assert!(EventStatus::Analyzed.is_terminal());
        assert!(EventStatus::Rejected.is_terminal());
    }
}
