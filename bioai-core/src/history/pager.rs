use tracing::{info, warn};

use crate::config::DEFAULT_HISTORY_PAGE_SIZE;
use crate::error::ApiError;
use crate::gateway::{Gateway, Transport};
use crate::models::HistoryRecord;

/// Fetch status surfaced to the list view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Error(String),
}

/// An entry in the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Client-side pagination over the full history list.
///
/// Items are replaced wholesale on every refresh and kept newest first.
/// `current_page` always satisfies `1 <= current_page <= total_pages()`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPager {
    items: Vec<HistoryRecord>,
    page_size: usize,
    current_page: usize,
    state: LoadState,
}

impl Default for HistoryPager {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_PAGE_SIZE)
    }
}

impl HistoryPager {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_size: page_size.max(1),
            current_page: 1,
            state: LoadState::Idle,
        }
    }

    /// Fetch, sort and replace the record set. Last response to arrive wins.
    pub async fn refresh<T: Transport>(&mut self, gateway: &Gateway<T>) {
        self.begin_refresh();
        let result = gateway.history().await;
        self.finish_refresh(result);
    }

    pub fn begin_refresh(&mut self) {
        self.state = LoadState::Loading;
    }

    /// Apply a fetch result. On error the previous items are kept untouched.
    pub fn finish_refresh(&mut self, result: Result<Vec<HistoryRecord>, ApiError>) {
        match result {
            Ok(mut records) => {
                // Stable: equal timestamps keep their server order
                records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                info!("Loaded {} history records", records.len());
                self.items = records;
                self.current_page = self.current_page.clamp(1, self.total_pages());
                self.state = LoadState::Idle;
            }
            Err(e) => {
                warn!("History refresh failed: {}", e);
                self.state = LoadState::Error(e.to_string());
            }
        }
    }

    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.current_page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.has_previous_page() {
            self.current_page -= 1;
        }
    }

    /// Jump to `page` when it exists; otherwise nothing changes.
    pub fn go_to_page(&mut self, page: usize) {
        if (1..=self.total_pages()).contains(&page) {
            self.current_page = page;
        }
    }

    pub fn items(&self) -> &[HistoryRecord] {
        &self.items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// At least one, even with no items.
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    pub fn current_page_items(&self) -> &[HistoryRecord] {
        let start = ((self.current_page - 1) * self.page_size).min(self.items.len());
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    /// First, last, and the pages around the current one; gaps of the form
    /// `current ± 2` are shown as an ellipsis.
    pub fn page_links(&self) -> Vec<PageLink> {
        let total = self.total_pages();
        let current = self.current_page;
        (1..=total)
            .filter_map(|page| {
                let near = page + 1 >= current && page <= current + 1;
                if page == 1 || page == total || near {
                    Some(PageLink::Page(page))
                } else if page + 2 == current || page == current + 2 {
                    Some(PageLink::Ellipsis)
                } else {
                    None
                }
            })
            .collect()
    }

    /// "Showing 20 of 45 analyses".
    pub fn summary(&self) -> String {
        let total = self.total_items();
        format!(
            "Showing {} of {} {}",
            self.current_page_items().len(),
            total,
            if total == 1 { "analysis" } else { "analyses" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn records(n: usize) -> Vec<HistoryRecord> {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        (0..n)
            .map(|i| HistoryRecord {
                id: i as i64 + 1,
                input_sequence: "ATGC".to_string(),
                sequence_type: None,
                results: None,
                created_at: base + Duration::minutes(i as i64),
            })
            .collect()
    }

    fn loaded(n: usize, page_size: usize) -> HistoryPager {
        let mut pager = HistoryPager::new(page_size);
        pager.finish_refresh(Ok(records(n)));
        pager
    }

    #[test]
    fn test_empty_pager_has_one_page() {
        let pager = HistoryPager::default();
        assert_eq!(pager.page_size(), 20);
        assert_eq!(pager.total_pages(), 1);
        assert_eq!(pager.current_page(), 1);
        assert!(pager.current_page_items().is_empty());
        assert!(!pager.has_next_page());
        assert!(!pager.has_previous_page());
    }

    #[test]
    fn test_forty_five_items_three_pages() {
        let mut pager = loaded(45, 20);
        assert_eq!(pager.total_pages(), 3);
        assert_eq!(pager.current_page_items().len(), 20);

        pager.go_to_page(3);
        assert_eq!(pager.current_page(), 3);
        assert_eq!(pager.current_page_items().len(), 5);

        pager.go_to_page(4);
        assert_eq!(pager.current_page(), 3);
        pager.go_to_page(0);
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn test_next_and_previous_stop_at_bounds() {
        let mut pager = loaded(45, 20);
        pager.previous_page();
        assert_eq!(pager.current_page(), 1);

        pager.next_page();
        pager.next_page();
        pager.next_page();
        assert_eq!(pager.current_page(), 3);
        assert!(!pager.has_next_page());

        pager.previous_page();
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn test_refresh_sorts_newest_first() {
        let pager = loaded(3, 20);
        let ids: Vec<i64> = pager.items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_timestamps() {
        let mut input = records(3);
        let when = input[0].created_at;
        for r in &mut input {
            r.created_at = when;
        }
        let mut pager = HistoryPager::new(20);
        pager.finish_refresh(Ok(input));
        let ids: Vec<i64> = pager.items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_refresh_clamps_page_without_resetting() {
        let mut pager = loaded(45, 20);
        pager.go_to_page(3);

        pager.finish_refresh(Ok(records(50)));
        assert_eq!(pager.current_page(), 3);

        pager.finish_refresh(Ok(records(25)));
        assert_eq!(pager.current_page(), 2);

        pager.finish_refresh(Ok(Vec::new()));
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_failed_refresh_keeps_items() {
        let mut pager = loaded(5, 20);
        pager.begin_refresh();
        assert!(pager.is_loading());

        pager.finish_refresh(Err(ApiError::Unreachable));
        assert_eq!(pager.total_items(), 5);
        assert_eq!(
            pager.error(),
            Some("Unable to connect to server. Please try again.")
        );

        pager.finish_refresh(Ok(records(2)));
        assert_eq!(pager.state(), &LoadState::Idle);
        assert_eq!(pager.total_items(), 2);
    }

    #[test]
    fn test_zero_page_size_is_coerced() {
        let pager = loaded(3, 0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.total_pages(), 3);
    }

    #[test]
    fn test_page_links_with_ellipses() {
        let mut pager = loaded(200, 20);
        pager.go_to_page(5);
        assert_eq!(
            pager.page_links(),
            vec![
                PageLink::Page(1),
                PageLink::Ellipsis,
                PageLink::Page(4),
                PageLink::Page(5),
                PageLink::Page(6),
                PageLink::Ellipsis,
                PageLink::Page(10),
            ]
        );
    }

    #[test]
    fn test_page_links_near_start() {
        let pager = loaded(100, 20);
        assert_eq!(
            pager.page_links(),
            vec![
                PageLink::Page(1),
                PageLink::Page(2),
                PageLink::Ellipsis,
                PageLink::Page(5),
            ]
        );
    }

    #[test]
    fn test_summary_wording() {
        assert_eq!(loaded(1, 20).summary(), "Showing 1 of 1 analysis");
        assert_eq!(loaded(45, 20).summary(), "Showing 20 of 45 analyses");
    }
}
