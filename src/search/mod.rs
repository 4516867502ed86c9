pub mod filter;
pub mod guests;
pub mod history;
pub mod session;
pub mod storage;
pub mod types;

pub use filter::{active_filter_count, filter_properties};
pub use history::SearchHistory;
pub use session::{SearchSession, SearchView};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use types::{CategoryFilter, FilterSelection, PriceRange, RoomThreshold, SearchParams, SearchQuery};
