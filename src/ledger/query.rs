//! Read-side helpers over the loaded record list.

use crate::ledger::EventLedger;
use crate::store::RemoteStore;
use crate::types::{EventRecord, EventStatus};

/// Status counts over the loaded list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerStats {
    pub total: usize,
    pub analyzed: usize,
    pub pending: usize,
    pub rejected: usize,
}

/// Search and region criteria applied to the loaded list.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Case-insensitive substring match against region or id.
    pub search: Option<String>,
    /// Exact region match; `None` admits all regions.
    pub region: Option<String>,
}

impl EventFilter {
    #[must_use]
    pub fn matches(&self, record: &EventRecord) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = record.region.to_lowercase().contains(&term)
                || record.id.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        match &self.region {
            Some(region) => record.region == *region,
            None => true,
        }
    }
}

/// One fixed-size page of filtered records.
#[derive(Debug, Clone)]
pub struct EventPage<'a> {
    /// Records on this page, in list (newest-first) order.
    pub records: Vec<&'a EventRecord>,
    /// 1-based page number actually returned.
    pub page: usize,
    pub total_pages: usize,
    /// Matches across all pages.
    pub total_matches: usize,
}

impl<S: RemoteStore> EventLedger<S> {
    /// Status counts for the dashboard.
    #[must_use]
    pub fn stats(&self) -> LedgerStats {
        let mut stats = LedgerStats { total: self.records.len(), ..LedgerStats::default() };
        for record in &self.records {
            match record.status {
                EventStatus::Analyzed => stats.analyzed += 1,
                EventStatus::Pending => stats.pending += 1,
                EventStatus::Rejected => stats.rejected += 1,
            }
        }
        stats
    }

    /// Records matching `filter`, in list (newest-first) order.
    #[must_use]
    pub fn filtered(&self, filter: &EventFilter) -> Vec<&EventRecord> {
        self.records.iter().filter(|record| filter.matches(record)).collect()
    }

    /// One fixed-size page of filtered records. `page` is 1-based and
    /// clamped to the last page; `per_page` of zero is treated as one.
    #[must_use]
    pub fn page(&self, filter: &EventFilter, page: usize, per_page: usize) -> EventPage<'_> {
        let per_page = per_page.max(1);
        let matches = self.filtered(filter);
        let total_matches = matches.len();
        let total_pages = total_matches.div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);
        let records = matches
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();
        EventPage { records, page, total_pages, total_matches }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn record(id: &str, region: &str, status: EventStatus) -> EventRecord {
        EventRecord {
            id: id.into(),
            payload: String::new(),
            created_at: 0,
            owner: "0xAA".into(),
            region: region.into(),
            intensity: 5,
            status,
        }
    }

    fn loaded_ledger() -> EventLedger<InMemoryStore> {
        let mut ledger = EventLedger::new(InMemoryStore::new());
        ledger.records = vec![
            record("1-aa", "North Pacific", EventStatus::Pending),
            record("2-bb", "North Atlantic", EventStatus::Analyzed),
            record("3-cc", "North Pacific", EventStatus::Rejected),
            record("4-dd", "Indian Ocean", EventStatus::Pending),
        ];
        ledger
    }

    #[test]
    fn stats_count_every_status() {
        let stats = loaded_ledger().stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.analyzed, 1);
        assert_eq!(stats.rejected, 1);
    }

    #[test]
    fn filter_by_region_and_search() {
        let ledger = loaded_ledger();

        let by_region = ledger.filtered(&EventFilter {
            region: Some("North Pacific".into()),
            ..EventFilter::default()
        });
        assert_eq!(by_region.len(), 2);

        let by_search = ledger.filtered(&EventFilter {
            search: Some("atlantic".into()),
            ..EventFilter::default()
        });
        assert_eq!(by_search.len(), 1);
        assert_eq!(by_search[0].id, "2-bb");

        let by_id = ledger.filtered(&EventFilter {
            search: Some("4-DD".into()),
            ..EventFilter::default()
        });
        assert_eq!(by_id.len(), 1);
    }

    #[test]
    fn paging_clamps_and_counts() {
        let ledger = loaded_ledger();
        let filter = EventFilter::default();

        let first = ledger.page(&filter, 1, 3);
        assert_eq!(first.records.len(), 3);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.total_matches, 4);

        let second = ledger.page(&filter, 2, 3);
        assert_eq!(second.records.len(), 1);
        assert_eq!(second.records[0].id, "4-dd");

        let clamped = ledger.page(&filter, 99, 3);
        assert_eq!(clamped.page, 2);
    }

    #[test]
    fn empty_list_still_has_one_page() {
        let ledger = EventLedger::new(InMemoryStore::new());
        let page = ledger.page(&EventFilter::default(), 1, 5);
        assert!(page.records.is_empty());
        assert_eq!(page.total_pages, 1);
    }
}
