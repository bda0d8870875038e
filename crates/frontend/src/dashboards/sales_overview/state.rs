//! Canonical filter state and batch bookkeeping for the sales dashboard.

use crate::shared::date_utils::day_window;
use chrono::NaiveDate;
use contracts::dashboards::sales_overview::{
    CategoryComparisonEntry, FilterBody, KpiSnapshot, ProductRankingEntry,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// The single authoritative filter driving the current batch.
///
/// An empty string means the field is inactive. `start` and `end` are
/// always either both set or both empty; a half-open range is never
/// produced. The value is replaced wholesale on every change, never
/// patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub category: String,
    pub start: String,
    pub end: String,
}

impl FilterSelection {
    /// Replace the category, keeping the current date range. An empty
    /// category means "all categories".
    pub fn with_category(&self, category: String) -> Self {
        Self {
            category,
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }

    /// Window covering the last `days` days up to `today` inclusive.
    /// Supersedes any previously applied date range. A window whose start
    /// would fall outside the supported calendar range leaves the filter
    /// unchanged.
    pub fn with_day_window(&self, today: NaiveDate, days: u32) -> Self {
        match day_window(today, days) {
            Some((start, end)) => Self {
                category: self.category.clone(),
                start,
                end,
            },
            None => self.clone(),
        }
    }

    /// Explicit date range. A single chosen date becomes a one-day range;
    /// clearing both dates clears the range.
    pub fn with_date_range(&self, from: String, to: String) -> Self {
        let (start, end) = match (from.is_empty(), to.is_empty()) {
            (true, true) => (String::new(), String::new()),
            (false, true) => (from.clone(), from),
            (true, false) => (to.clone(), to),
            (false, false) => (from, to),
        };
        Self {
            category: self.category.clone(),
            start,
            end,
        }
    }

    /// True when no filter is active and the backend should return the
    /// unfiltered dataset.
    pub fn is_empty(&self) -> bool {
        self.category.is_empty() && self.start.is_empty() && self.end.is_empty()
    }

    /// Wire body for the batch endpoints; inactive fields are omitted.
    /// One body is built per batch and shared by all four requests.
    pub fn to_body(&self) -> FilterBody {
        FilterBody {
            category: active(&self.category),
            start: active(&self.start),
            end: active(&self.end),
        }
    }
}

fn active(field: &str) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

/// The four datasets of one batch. Bundled in a single struct so a batch
/// commits atomically: the UI never shows a mix of old and new data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub kpis: KpiSnapshot,
    pub top_products: Vec<ProductRankingEntry>,
    pub least_products: Vec<ProductRankingEntry>,
    pub category_comparison: Vec<CategoryComparisonEntry>,
}

/// Outcome of a settled batch.
///
/// The batch commits only when all four requests succeeded; any failure
/// discards the whole batch, so the previously displayed datasets remain
/// unchanged.
pub fn commit_batch<E>(
    kpis: Result<KpiSnapshot, E>,
    top: Result<Vec<ProductRankingEntry>, E>,
    least: Result<Vec<ProductRankingEntry>, E>,
    comparison: Result<Vec<CategoryComparisonEntry>, E>,
) -> Option<DashboardData> {
    match (kpis, top, least, comparison) {
        (Ok(kpis), Ok(top_products), Ok(least_products), Ok(category_comparison)) => {
            Some(DashboardData {
                kpis,
                top_products,
                least_products,
                category_comparison,
            })
        }
        _ => None,
    }
}

/// Monotonic batch counter implementing last-filter-wins.
///
/// Every batch takes a sequence number from [`begin`](Self::begin) before
/// its requests go out; when the responses arrive, the batch commits only
/// if [`is_current`](Self::is_current) still holds. Results of a
/// superseded batch are discarded.
#[derive(Debug, Clone, Default)]
pub struct BatchSequencer {
    latest: Arc<AtomicU64>,
}

impl BatchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new batch and return its sequence number.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether `seq` is still the newest batch.
    pub fn is_current(&self, seq: u64) -> bool {
        self.latest.load(Ordering::Relaxed) == seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_window_selection() {
        let filter = FilterSelection::default().with_day_window(date(2024, 3, 15), 7);
        assert_eq!(filter.start, "2024-03-08");
        assert_eq!(filter.end, "2024-03-15");
    }

    #[test]
    fn test_category_survives_date_changes() {
        let filter = FilterSelection::default()
            .with_category("Electronics".to_string())
            .with_day_window(date(2024, 3, 15), 30);
        assert_eq!(filter.category, "Electronics");

        let filter = filter.with_date_range("2024-01-01".to_string(), "2024-01-31".to_string());
        assert_eq!(filter.category, "Electronics");
        assert_eq!(filter.start, "2024-01-01");
    }

    #[test]
    fn test_single_date_becomes_one_day_range() {
        let filter =
            FilterSelection::default().with_date_range("2024-05-01".to_string(), String::new());
        assert_eq!(filter.start, "2024-05-01");
        assert_eq!(filter.end, "2024-05-01");

        let filter =
            FilterSelection::default().with_date_range(String::new(), "2024-05-02".to_string());
        assert_eq!(filter.start, "2024-05-02");
        assert_eq!(filter.end, "2024-05-02");
    }

    #[test]
    fn test_clearing_both_dates_clears_the_range() {
        let filter = FilterSelection::default()
            .with_day_window(date(2024, 3, 15), 7)
            .with_date_range(String::new(), String::new());
        assert!(filter.start.is_empty());
        assert!(filter.end.is_empty());
    }

    #[test]
    fn test_reset_restores_the_empty_filter() {
        let filter = FilterSelection::default()
            .with_category("Toys".to_string())
            .with_day_window(date(2024, 3, 15), 7);
        assert!(!filter.is_empty());

        let reset = FilterSelection::default();
        assert!(reset.is_empty());
        assert_eq!(reset.category, "");
        assert_eq!(reset.start, "");
        assert_eq!(reset.end, "");
    }

    #[test]
    fn test_body_omits_inactive_fields() {
        assert_eq!(FilterSelection::default().to_body(), FilterBody::default());

        let body = FilterSelection::default()
            .with_category("Books".to_string())
            .with_day_window(date(2024, 3, 15), 7)
            .to_body();
        assert_eq!(body.category.as_deref(), Some("Books"));
        assert_eq!(body.start.as_deref(), Some("2024-03-08"));
        assert_eq!(body.end.as_deref(), Some("2024-03-15"));
    }

    #[test]
    fn test_huge_day_window_leaves_filter_unchanged() {
        let filter = FilterSelection::default()
            .with_category("Books".to_string())
            .with_date_range("2024-01-01".to_string(), "2024-01-31".to_string());

        let unchanged = filter.with_day_window(date(2024, 3, 15), u32::MAX);
        assert_eq!(unchanged, filter);
    }

    #[test]
    fn test_batch_commits_when_all_requests_succeed() {
        let top = vec![ProductRankingEntry {
            product_name: "Widget".to_string(),
            units_sold: 12,
        }];
        let batch = commit_batch::<String>(
            Ok(KpiSnapshot::default()),
            Ok(top.clone()),
            Ok(Vec::new()),
            Ok(Vec::new()),
        )
        .unwrap();
        assert_eq!(batch.top_products, top);
        assert!(batch.least_products.is_empty());
    }

    #[test]
    fn test_failed_batch_discards_all_datasets() {
        assert!(
            commit_batch(Err("boom"), Ok(Vec::new()), Ok(Vec::new()), Ok(Vec::new())).is_none()
        );
        assert!(commit_batch(
            Ok(KpiSnapshot::default()),
            Err("boom"),
            Ok(Vec::new()),
            Ok(Vec::new())
        )
        .is_none());
        assert!(commit_batch(
            Ok(KpiSnapshot::default()),
            Ok(Vec::new()),
            Err("boom"),
            Ok(Vec::new())
        )
        .is_none());
        assert!(commit_batch(
            Ok(KpiSnapshot::default()),
            Ok(Vec::new()),
            Ok(Vec::new()),
            Err("boom")
        )
        .is_none());
    }

    #[test]
    fn test_superseded_batch_is_not_current() {
        let sequencer = BatchSequencer::new();
        let first = sequencer.begin();
        assert!(sequencer.is_current(first));

        let second = sequencer.begin();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }
}
