use std::sync::Arc;

use shared::{
    domain::{CatalogItemId, OutfitId},
    protocol::{BrandItems, CatalogItem, CatalogPayload, SavedOutfit},
};

use crate::source::{CatalogSource, StaticCatalogSource};

pub(crate) fn item(id: i64, name: &str, brand: &str, image_url: &str) -> CatalogItem {
    CatalogItem {
        id: CatalogItemId(id),
        name: name.to_string(),
        brand: brand.to_string(),
        price: "$2,500".to_string(),
        image_url: image_url.to_string(),
        kind: "Evening Dress".to_string(),
        description: format!("{name} by {brand}"),
    }
}

/// One dress, no casual items.
pub(crate) fn single_dress_payload() -> CatalogPayload {
    CatalogPayload {
        brand_items: BrandItems {
            dresses: vec![item(1, "Red Gown", "Gucci", "/a.jpg")],
            casual: Vec::new(),
        },
        saved_outfits: Vec::new(),
    }
}

pub(crate) fn sample_payload() -> CatalogPayload {
    CatalogPayload {
        brand_items: BrandItems {
            dresses: vec![
                item(1, "Red Gown", "Gucci", "/a.jpg"),
                item(2, "Baroque Mini", "Versace", "/b.jpg"),
            ],
            casual: vec![
                item(3, "Linen Set", "Prada", "/c.jpg"),
                item(4, "Logo Hoodie", "Gucci", "/d.jpg"),
            ],
        },
        saved_outfits: vec![SavedOutfit {
            id: OutfitId(1),
            name: "Gala Night".to_string(),
            image_url: "/a.jpg".to_string(),
            description: "Red gown with gold accessories".to_string(),
        }],
    }
}

pub(crate) fn static_source(payload: CatalogPayload) -> Arc<StaticCatalogSource> {
    Arc::new(StaticCatalogSource::new(payload))
}

pub(crate) fn as_source(source: &Arc<StaticCatalogSource>) -> Arc<dyn CatalogSource> {
    source.clone()
}
