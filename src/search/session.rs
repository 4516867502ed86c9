use crate::config::AppConfig;
use crate::data::PropertyProvider;
use crate::listing::pagination::{page_numbers, PageItem, Paginator};
use crate::models::{Category, Property};
use crate::search::filter::{active_filter_count, filter_properties};
use crate::search::history::SearchHistory;
use crate::search::storage::KeyValueStore;
use crate::search::types::{CategoryFilter, FilterSelection, SearchParams, SearchQuery};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Snapshot of what the results page shows
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView<'a> {
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub pages: Vec<PageItem>,
    pub items: &'a [Property],
    pub active_filters: usize,
    pub loading: bool,
}

/// State behind the property results page: current search, filters,
/// category tab, page cursor and recent searches.
///
/// Every change marks the results stale; they are rebuilt from the full
/// property list by [`SearchSession::recompute`] or, after the debounce
/// delay, by [`SearchSession::refresh`].
pub struct SearchSession {
    properties: Vec<Property>,
    categories: Vec<Category>,
    query: SearchQuery,
    history: SearchHistory,
    pages: Paginator,
    debounce: Duration,
    results: Vec<Property>,
    active_filters: usize,
    loading: bool,
}

impl SearchSession {
    pub fn new(
        properties: Vec<Property>,
        categories: Vec<Category>,
        history: SearchHistory,
        page_size: usize,
        debounce: Duration,
    ) -> Self {
        let mut session = Self {
            properties,
            categories,
            query: SearchQuery::default(),
            history,
            pages: Paginator::new(page_size),
            debounce,
            results: Vec::new(),
            active_filters: 0,
            loading: true,
        };
        session.recompute();
        session
    }

    /// Load listings from `provider` and history from `store`
    pub async fn open(
        provider: &dyn PropertyProvider,
        store: Arc<dyn KeyValueStore>,
        config: &AppConfig,
    ) -> Result<Self> {
        info!("Loading listings from {}", provider.source_name());
        let properties = provider
            .properties()
            .await
            .with_context(|| format!("Failed to load properties from {}", provider.source_name()))?;
        let categories = provider
            .categories()
            .await
            .with_context(|| format!("Failed to load categories from {}", provider.source_name()))?;
        let history = SearchHistory::load(store);

        Ok(Self::new(
            properties,
            categories,
            history,
            config.page_size,
            config.debounce(),
        ))
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut SearchHistory {
        &mut self.history
    }

    /// Submit a search from the search bar and remember it
    pub fn search(&mut self, params: SearchParams) {
        self.history.record(&params);
        self.query.params = params;
        self.changed();
    }

    /// Live edit of the search text, not recorded in history
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.query.params.location = location.into();
        self.changed();
    }

    pub fn set_category(&mut self, category: &str) {
        self.query.category = CategoryFilter::from(category);
        self.changed();
    }

    pub fn apply_filters(&mut self, selection: FilterSelection) {
        self.query.selection = selection;
        self.changed();
    }

    pub fn clear_location(&mut self) {
        self.query.params.location.clear();
        self.changed();
    }

    pub fn clear_dates(&mut self) {
        let params = &mut self.query.params;
        params.check_in.clear();
        params.check_out.clear();
        params.is_flexible_dates = false;
        params.flexible_option = None;
        self.changed();
    }

    pub fn clear_guests(&mut self) {
        self.query.params.guests = 0;
        self.query.params.guest_details.clear();
        self.changed();
    }

    /// Back to the defaults: no search text, all categories, no filters
    pub fn clear_all(&mut self) {
        self.query = SearchQuery::default();
        self.changed();
    }

    pub fn set_page(&mut self, page: usize) {
        self.pages.set_page(page, self.results.len());
    }

    pub fn next_page(&mut self) {
        self.pages.next(self.results.len());
    }

    pub fn previous_page(&mut self) {
        self.pages.previous(self.results.len());
    }

    /// Rebuild the results from the full list right away
    pub fn recompute(&mut self) {
        self.results = filter_properties(&self.properties, &self.query)
            .into_iter()
            .cloned()
            .collect();
        // A page picked while results were stale may no longer exist
        self.pages.set_page(self.pages.page(), self.results.len());
        self.active_filters = active_filter_count(&self.query.selection);
        self.loading = false;
        debug!(
            "{} of {} properties match, {} active filters",
            self.results.len(),
            self.properties.len(),
            self.active_filters
        );
    }

    /// Wait out the debounce delay, then rebuild the results
    pub async fn refresh(&mut self) {
        if self.debounce > Duration::ZERO {
            tokio::time::sleep(self.debounce).await;
        }
        self.recompute();
    }

    pub fn results(&self) -> &[Property] {
        &self.results
    }

    pub fn view(&self) -> SearchView<'_> {
        let total_pages = self.pages.total_pages(self.results.len());
        SearchView {
            total: self.results.len(),
            page: self.pages.page(),
            per_page: self.pages.per_page(),
            total_pages,
            pages: page_numbers(self.pages.page(), total_pages),
            items: self.pages.slice(&self.results),
            active_filters: self.active_filters,
            loading: self.loading,
        }
    }

    fn changed(&mut self) {
        self.loading = true;
        self.pages.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockProvider;
    use crate::search::guests::GuestCounts;
    use crate::search::history::HISTORY_KEY;
    use crate::search::storage::MemoryStore;
    use crate::search::types::{PriceRange, RoomThreshold};

    async fn session(page_size: usize) -> SearchSession {
        let config = AppConfig {
            page_size,
            ..AppConfig::default()
        };
        SearchSession::open(&MockProvider::new(), Arc::new(MemoryStore::new()), &config)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_defaults_apply_price_cap() {
        let session = session(12).await;
        let view = session.view();
        // The 6.5M house and the 25M farm sit above the default range
        assert_eq!(view.total, 6);
        assert_eq!(view.active_filters, 0);
        assert!(!view.loading);
    }

    #[tokio::test]
    async fn test_search_records_history_and_filters() {
        let mut session = session(12).await;
        session.search(SearchParams {
            location: "lagos".into(),
            guests: 4,
            ..SearchParams::default()
        });
        assert!(session.view().loading);
        session.recompute();

        let ids: Vec<_> = session.results().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4"]);
        assert_eq!(session.history().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_waits_for_debounce() {
        let mut session = session(12).await;
        session.set_category("beachfront");
        let started = tokio::time::Instant::now();
        session.refresh().await;
        assert!(started.elapsed() >= Duration::from_millis(500));
        assert_eq!(session.results().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_filters() {
        let mut session = session(12).await;
        session.search(SearchParams {
            location: "ikoyi".into(),
            check_in: "2025-05-01".into(),
            check_out: "2025-05-03".into(),
            guests: 2,
            is_flexible_dates: true,
            flexible_option: Some("weekend".into()),
            ..SearchParams::default()
        });
        session.apply_filters(FilterSelection {
            price_range: PriceRange::new(0, 500_000),
            beds: Some(RoomThreshold::at_least(2)),
            ..FilterSelection::default()
        });
        session.recompute();
        assert_eq!(session.view().active_filters, 2);

        session.clear_dates();
        let params = &session.query().params;
        assert!(params.check_in.is_empty() && params.check_out.is_empty());
        assert!(!params.is_flexible_dates);
        assert_eq!(params.flexible_option, None);
        assert_eq!(params.location, "ikoyi");

        session.clear_guests();
        assert_eq!(session.query().params.guests, 0);

        session.clear_all();
        session.recompute();
        assert_eq!(session.query(), &SearchQuery::default());
        assert_eq!(session.view().active_filters, 0);
    }

    #[tokio::test]
    async fn test_paging_through_results() {
        let mut session = session(4).await;
        session.apply_filters(FilterSelection {
            price_range: PriceRange::new(0, u64::MAX),
            ..FilterSelection::default()
        });
        session.recompute();

        let view = session.view();
        assert_eq!(view.total, 8);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.items.len(), 4);

        session.next_page();
        session.next_page();
        let view = session.view();
        assert_eq!(view.page, 2);
        assert_eq!(view.items[0].id, "5");

        session.set_category("all");
        assert_eq!(session.view().page, 1);
    }

    #[tokio::test]
    async fn test_default_guest_picker_hides_land() {
        let mut session = session(12).await;
        session.apply_filters(FilterSelection {
            price_range: PriceRange::new(0, u64::MAX),
            ..FilterSelection::default()
        });
        let guest_details = GuestCounts::default();
        session.search(SearchParams {
            guests: guest_details.total(),
            guest_details,
            ..SearchParams::default()
        });
        session.recompute();

        assert_eq!(session.view().total, 6);
        assert!(session.results().iter().all(|p| !p.property_type.is_landed()));
        assert_eq!(session.history().len(), 1);

        session.clear_guests();
        session.recompute();
        assert_eq!(session.view().total, 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_clamped_after_results_shrink() {
        let mut session = session(4).await;
        session.apply_filters(FilterSelection {
            price_range: PriceRange::new(0, u64::MAX),
            ..FilterSelection::default()
        });
        session.recompute();

        // Page 2 still exists in the stale results when it is picked
        session.set_category("beachfront");
        session.set_page(2);
        session.refresh().await;

        let view = session.view();
        assert_eq!(view.total, 1);
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].id, "2");
    }

    #[tokio::test]
    async fn test_view_reports_effective_page_size() {
        let unpaged = session(0).await;
        let view = unpaged.view();
        assert_eq!(view.per_page, 1);
        assert_eq!(view.items.len(), 1);

        let paged = session(4).await;
        assert_eq!(paged.view().per_page, 4);
    }

    #[tokio::test]
    async fn test_history_survives_reopen() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let config = AppConfig::default();
        let mut session = SearchSession::open(&MockProvider::new(), store.clone(), &config)
            .await
            .unwrap();
        session.search(SearchParams {
            location: "Wuse".into(),
            ..SearchParams::default()
        });
        assert!(store.get(HISTORY_KEY).unwrap().is_some());

        let reopened = SearchSession::open(&MockProvider::new(), store, &config)
            .await
            .unwrap();
        assert_eq!(reopened.history().entries()[0].location, "Wuse");
    }
}
