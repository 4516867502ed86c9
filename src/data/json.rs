use crate::data::traits::PropertyProvider;
use crate::models::{Category, Property};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Listings exported to a JSON file.
///
/// Accepts either a bare array of properties or an object with
/// `properties` and `categories` arrays.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Catalog {
        properties: Vec<Property>,
        #[serde(default)]
        categories: Vec<Category>,
    },
    Bare(Vec<Property>),
}

impl JsonFileProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn load(&self) -> Result<Document> {
        debug!("Reading listings from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse listings in {}", self.path.display()))
    }
}

#[async_trait]
impl PropertyProvider for JsonFileProvider {
    async fn properties(&self) -> Result<Vec<Property>> {
        let properties = match self.load().await? {
            Document::Catalog { properties, .. } => properties,
            Document::Bare(properties) => properties,
        };

        for property in properties.iter().filter(|p| !p.is_consistent()) {
            warn!(
                "Property {} is a {} but its size does not match that type",
                property.id, property.property_type
            );
        }

        info!("Loaded {} properties from {}", properties.len(), self.path.display());
        Ok(properties)
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        match self.load().await? {
            Document::Catalog { categories, .. } if !categories.is_empty() => Ok(categories),
            Document::Catalog { properties, .. } | Document::Bare(properties) => {
                // No category metadata in the file, fall back to the ids in use
                let ids: BTreeSet<String> = properties
                    .into_iter()
                    .flat_map(|p| p.categories.into_iter())
                    .collect();
                Ok(ids.into_iter().map(|id| Category::new(&id, &id, false)).collect())
            }
        }
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}
