//! Home view: pick a catalog item and run the simulated fitting.

use std::{sync::Arc, time::Duration};

use shared::{
    domain::{CatalogItemId, TryOnPhase},
    protocol::{CatalogItem, CatalogPayload, SavedOutfit},
};
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use crate::{
    catalog::{apply_catalog_result, request_catalog, CatalogState},
    error::CatalogError,
    source::CatalogSource,
    tasks::{OperationToken, ViewTasks},
};

pub const TRY_ON_DELAY: Duration = Duration::from_millis(2500);

const VIEW: &str = "try_on";

enum TryOnEvent {
    CatalogFetched(Result<CatalogPayload, CatalogError>),
    TryOnElapsed,
}

struct PendingTryOn {
    token: OperationToken,
    item_id: CatalogItemId,
}

pub struct TryOnController {
    source: Arc<dyn CatalogSource>,
    tasks: ViewTasks<TryOnEvent>,
    catalog: CatalogState,
    selected: Option<CatalogItem>,
    phase: TryOnPhase,
    result_image: Option<String>,
    pending_try_on: Option<PendingTryOn>,
    saved_outfits_open: bool,
}

impl TryOnController {
    pub fn new(source: Arc<dyn CatalogSource>, runtime: Handle) -> Self {
        Self {
            source,
            tasks: ViewTasks::new(runtime),
            catalog: CatalogState::NotRequested,
            selected: None,
            phase: TryOnPhase::Idle,
            result_image: None,
            pending_try_on: None,
            saved_outfits_open: false,
        }
    }

    /// Constructs the view and issues its catalog fetch.
    pub fn mount(source: Arc<dyn CatalogSource>, runtime: Handle) -> Self {
        let mut controller = Self::new(source, runtime);
        controller.load_catalog();
        controller
    }

    pub fn load_catalog(&mut self) -> bool {
        request_catalog(
            &mut self.catalog,
            &mut self.tasks,
            &self.source,
            VIEW,
            TryOnEvent::CatalogFetched,
        )
        .is_some()
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// Dresses then casual; empty until the catalog arrives.
    pub fn all_items(&self) -> Vec<&CatalogItem> {
        self.catalog
            .payload()
            .map(|payload| payload.all_items().collect())
            .unwrap_or_default()
    }

    pub fn selected(&self) -> Option<&CatalogItem> {
        self.selected.as_ref()
    }

    pub fn phase(&self) -> TryOnPhase {
        self.phase
    }

    /// Set only while the phase is `Completed`.
    pub fn result_image(&self) -> Option<&str> {
        self.result_image.as_deref()
    }

    pub fn can_start_try_on(&self) -> bool {
        self.selected.is_some() && self.phase != TryOnPhase::Running
    }

    /// Any earlier result is cleared. A try-on still running for another
    /// item is cancelled; re-selecting the running item changes nothing.
    pub fn select_item(&mut self, item: CatalogItem) {
        if let Some(pending) = &self.pending_try_on {
            if pending.item_id == item.id {
                return;
            }
        }
        if let Some(pending) = self.pending_try_on.take() {
            self.tasks.cancel(pending.token);
            info!(
                view = VIEW,
                cancelled_item = %pending.item_id,
                "selection changed during try-on; pending result discarded"
            );
        }

        debug!(view = VIEW, item_id = %item.id, name = %item.name, "item selected");
        self.selected = Some(item);
        self.result_image = None;
        self.phase = TryOnPhase::Idle;
    }

    pub fn select_item_by_id(&mut self, id: CatalogItemId) -> bool {
        let Some(item) = self
            .catalog
            .payload()
            .and_then(|payload| payload.find_item(id))
            .cloned()
        else {
            return false;
        };
        self.select_item(item);
        true
    }

    /// No-op unless an item is selected and nothing is running.
    pub fn start_try_on(&mut self) -> bool {
        if !self.can_start_try_on() {
            return false;
        }
        let Some(item_id) = self.selected.as_ref().map(|item| item.id) else {
            return false;
        };

        let token = self
            .tasks
            .schedule_after("try_on", TRY_ON_DELAY, TryOnEvent::TryOnElapsed);
        self.pending_try_on = Some(PendingTryOn { token, item_id });
        self.phase = TryOnPhase::Running;
        self.result_image = None;
        info!(view = VIEW, %item_id, "virtual try-on started");
        true
    }

    /// "Try another": drops a finished result so a new run can be started.
    pub fn dismiss_result(&mut self) {
        if self.phase == TryOnPhase::Completed {
            self.phase = TryOnPhase::Idle;
            self.result_image = None;
        }
    }

    pub fn open_saved_outfits(&mut self) {
        self.saved_outfits_open = true;
    }

    pub fn close_saved_outfits(&mut self) {
        self.saved_outfits_open = false;
    }

    pub fn is_saved_outfits_open(&self) -> bool {
        self.saved_outfits_open
    }

    pub fn saved_outfits(&self) -> &[SavedOutfit] {
        self.catalog
            .payload()
            .map(|payload| payload.saved_outfits.as_slice())
            .unwrap_or_default()
    }

    pub fn has_pending_work(&self) -> bool {
        self.tasks.pending_count() > 0
    }

    /// Applies every completion that has already arrived.
    pub fn process_events(&mut self) -> usize {
        let mut applied = 0;
        while let Some((token, event)) = self.tasks.try_next() {
            self.apply(token, event);
            applied += 1;
        }
        applied
    }

    /// Waits for one completion and applies it; `false` when idle.
    pub async fn next_event(&mut self) -> bool {
        match self.tasks.next().await {
            Some((token, event)) => {
                self.apply(token, event);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, token: OperationToken, event: TryOnEvent) {
        match event {
            TryOnEvent::CatalogFetched(result) => {
                apply_catalog_result(&mut self.catalog, VIEW, result);
            }
            TryOnEvent::TryOnElapsed => self.finish_try_on(token),
        }
    }

    fn finish_try_on(&mut self, token: OperationToken) {
        match &self.pending_try_on {
            Some(pending) if pending.token == token => {}
            _ => {
                debug!(view = VIEW, token = token.get(), "stale try-on completion ignored");
                return;
            }
        }
        let Some(pending) = self.pending_try_on.take() else {
            return;
        };

        match &self.selected {
            Some(item) if item.id == pending.item_id => {
                self.phase = TryOnPhase::Completed;
                self.result_image = Some(item.image_url.clone());
                info!(view = VIEW, item_id = %item.id, "virtual try-on complete");
            }
            _ => {
                self.phase = TryOnPhase::Idle;
                warn!(
                    view = VIEW,
                    item_id = %pending.item_id,
                    "try-on finished for an item that is no longer selected"
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/try_on_tests.rs"]
mod tests;
