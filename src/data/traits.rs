use crate::models::{Category, Property};
use anyhow::Result;
use async_trait::async_trait;

/// Source of the listings shown to the user.
/// Injected into a search session instead of reading a shared global list.
#[async_trait]
pub trait PropertyProvider: Send + Sync {
    /// Load every property this source knows about
    async fn properties(&self) -> Result<Vec<Property>>;

    /// Load the browsing categories
    async fn categories(&self) -> Result<Vec<Category>>;

    /// Get the name of the data source
    fn source_name(&self) -> &'static str;
}
