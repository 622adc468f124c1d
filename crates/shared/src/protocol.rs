use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{CatalogItemId, Category, OutfitId};

pub const CATALOG_ROUTE: &str = "/api/clothing";
pub const HEALTH_ROUTE: &str = "/healthz";
pub const IMAGES_ROUTE: &str = "/images";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: CatalogItemId,
    pub name: String,
    pub brand: String,
    pub price: String,
    pub image_url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedOutfit {
    pub id: OutfitId,
    pub name: String,
    pub image_url: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandItems {
    #[serde(default)]
    pub dresses: Vec<CatalogItem>,
    #[serde(default)]
    pub casual: Vec<CatalogItem>,
}

/// Document returned by the catalog endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPayload {
    pub brand_items: BrandItems,
    #[serde(default)]
    pub saved_outfits: Vec<SavedOutfit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("duplicate catalog item id {0}")]
    DuplicateItemId(CatalogItemId),
    #[error("catalog item {0} has no image reference")]
    MissingImage(CatalogItemId),
}

impl CatalogPayload {
    pub fn items(&self, category: Category) -> &[CatalogItem] {
        match category {
            Category::Dresses => &self.brand_items.dresses,
            Category::Casual => &self.brand_items.casual,
        }
    }

    /// Dresses first, then casual, each in payload order.
    pub fn all_items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.brand_items
            .dresses
            .iter()
            .chain(self.brand_items.casual.iter())
    }

    pub fn find_item(&self, id: CatalogItemId) -> Option<&CatalogItem> {
        self.all_items().find(|item| item.id == id)
    }

    pub fn item_count(&self) -> usize {
        self.brand_items.dresses.len() + self.brand_items.casual.len()
    }

    pub fn validate(&self) -> Result<(), PayloadError> {
        let mut seen = HashSet::new();
        for item in self.all_items() {
            if !seen.insert(item.id) {
                return Err(PayloadError::DuplicateItemId(item.id));
            }
            if item.image_url.trim().is_empty() {
                return Err(PayloadError::MissingImage(item.id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
