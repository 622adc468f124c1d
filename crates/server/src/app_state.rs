use std::sync::Arc;

use shared::protocol::CatalogPayload;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) catalog: Arc<CatalogPayload>,
}

impl AppState {
    pub(crate) fn new(catalog: CatalogPayload) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
