//! Brand gallery: the catalog one category at a time, filtered locally.

use std::sync::Arc;

use shared::{
    domain::{Category, UnknownCategory},
    protocol::{CatalogItem, CatalogPayload},
};
use tokio::runtime::Handle;
use tracing::debug;

use crate::{
    catalog::{apply_catalog_result, request_catalog, CatalogState},
    error::CatalogError,
    source::CatalogSource,
    tasks::{OperationToken, ViewTasks},
};

const VIEW: &str = "brand_gallery";

enum BrowserEvent {
    CatalogFetched(Result<CatalogPayload, CatalogError>),
}

pub struct CatalogBrowser {
    source: Arc<dyn CatalogSource>,
    tasks: ViewTasks<BrowserEvent>,
    catalog: CatalogState,
    category: Category,
}

impl CatalogBrowser {
    pub fn new(source: Arc<dyn CatalogSource>, runtime: Handle) -> Self {
        Self {
            source,
            tasks: ViewTasks::new(runtime),
            catalog: CatalogState::NotRequested,
            category: Category::default(),
        }
    }

    pub fn mount(source: Arc<dyn CatalogSource>, runtime: Handle) -> Self {
        let mut browser = Self::new(source, runtime);
        browser.load_catalog();
        browser
    }

    pub fn load_catalog(&mut self) -> bool {
        request_catalog(
            &mut self.catalog,
            &mut self.tasks,
            &self.source,
            VIEW,
            BrowserEvent::CatalogFetched,
        )
        .is_some()
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn set_category(&mut self, category: Category) {
        if self.category != category {
            debug!(view = VIEW, %category, "category selected");
            self.category = category;
        }
    }

    pub fn set_category_key(&mut self, key: &str) -> Result<(), UnknownCategory> {
        let category = key.parse::<Category>()?;
        self.set_category(category);
        Ok(())
    }

    /// The selected group in payload order; empty until loaded.
    pub fn filtered_items(&self) -> &[CatalogItem] {
        self.catalog
            .payload()
            .map(|payload| payload.items(self.category))
            .unwrap_or_default()
    }

    pub fn item_count(&self, category: Category) -> usize {
        self.catalog
            .payload()
            .map(|payload| payload.items(category).len())
            .unwrap_or(0)
    }

    pub fn process_events(&mut self) -> usize {
        let mut applied = 0;
        while let Some((token, event)) = self.tasks.try_next() {
            self.apply(token, event);
            applied += 1;
        }
        applied
    }

    pub async fn next_event(&mut self) -> bool {
        match self.tasks.next().await {
            Some((token, event)) => {
                self.apply(token, event);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, _token: OperationToken, event: BrowserEvent) {
        match event {
            BrowserEvent::CatalogFetched(result) => {
                apply_catalog_result(&mut self.catalog, VIEW, result);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/browser_tests.rs"]
mod tests;
