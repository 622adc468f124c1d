use std::sync::Arc;

use shared::protocol::CatalogPayload;
use tracing::{error, info};

use crate::{
    error::CatalogError,
    source::CatalogSource,
    tasks::{OperationToken, ViewTasks},
};

/// A view's own copy of the catalog. A failed load stays in `Loading`:
/// there is no retry path, the view simply keeps showing its spinner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogState {
    #[default]
    NotRequested,
    Loading,
    Loaded(CatalogPayload),
}

impl CatalogState {
    pub fn payload(&self) -> Option<&CatalogPayload> {
        match self {
            CatalogState::Loaded(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogState::Loaded(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }
}

/// Starts the one fetch a view is allowed; later calls return `None`.
pub(crate) fn request_catalog<E: Send + 'static>(
    state: &mut CatalogState,
    tasks: &mut ViewTasks<E>,
    source: &Arc<dyn CatalogSource>,
    view: &'static str,
    into_event: fn(Result<CatalogPayload, CatalogError>) -> E,
) -> Option<OperationToken> {
    if *state != CatalogState::NotRequested {
        return None;
    }
    *state = CatalogState::Loading;
    let source = Arc::clone(source);
    let token = tasks.spawn("load_catalog", async move {
        into_event(source.fetch_catalog().await)
    });
    info!(view, "catalog requested");
    Some(token)
}

pub(crate) fn apply_catalog_result(
    state: &mut CatalogState,
    view: &'static str,
    result: Result<CatalogPayload, CatalogError>,
) {
    match result {
        Ok(payload) => {
            info!(
                view,
                items = payload.item_count(),
                saved_outfits = payload.saved_outfits.len(),
                "catalog loaded"
            );
            *state = CatalogState::Loaded(payload);
        }
        Err(err) => {
            error!(view, error = %err, "error loading catalog data");
        }
    }
}
