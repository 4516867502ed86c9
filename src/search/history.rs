use crate::search::storage::KeyValueStore;
use crate::search::types::SearchParams;
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage key the history is written under
pub const HISTORY_KEY: &str = "propertySearchHistory";

/// Most entries kept in the history
pub const HISTORY_LIMIT: usize = 5;

/// Recent searches, newest first, one entry per place and date range
pub struct SearchHistory {
    entries: Vec<SearchParams>,
    store: Arc<dyn KeyValueStore>,
}

impl SearchHistory {
    /// Load the saved history. Unreadable or malformed data yields an
    /// empty history rather than an error.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let entries = match store.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<SearchParams>>(&raw) {
                Ok(stored) => {
                    let mut entries: Vec<SearchParams> = Vec::with_capacity(HISTORY_LIMIT);
                    for params in stored {
                        if !entries.iter().any(|kept| kept.same_search(&params)) {
                            entries.push(params);
                        }
                    }
                    entries.truncate(HISTORY_LIMIT);
                    entries
                }
                Err(e) => {
                    warn!("Error parsing search history: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Error reading search history: {}", e);
                Vec::new()
            }
        };

        debug!("Loaded {} search history entries", entries.len());
        Self { entries, store }
    }

    pub fn entries(&self) -> &[SearchParams] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Put a search at the front of the history.
    /// Searches with no location, check-in or guests are ignored.
    /// Returns whether the search was recorded.
    pub fn record(&mut self, params: &SearchParams) -> bool {
        if !params.is_recordable() {
            return false;
        }

        self.entries.retain(|entry| !entry.same_search(params));
        self.entries.insert(0, params.clone());
        self.entries.truncate(HISTORY_LIMIT);
        self.persist();
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.store.remove(HISTORY_KEY) {
            warn!("Failed to clear search history: {}", e);
        }
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.entries)
            .map_err(crate::error::Error::from)
            .and_then(|json| self.store.set(HISTORY_KEY, &json));
        if let Err(e) = result {
            warn!("Failed to save search history: {}", e);
        }
    }
}
