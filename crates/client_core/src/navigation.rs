//! Named views and the single active controller behind them.
//!
//! Views never share state. Leaving a view drops its controller, which
//! cancels anything it still had pending, and entering a view builds a
//! fresh controller that fetches the catalog again.

use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::info;

use crate::{
    browser::CatalogBrowser, outfit_creator::OutfitCreator, source::CatalogSource,
    try_on::TryOnController,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    TryOn,
    BrandGallery,
    OutfitCreator,
    /// Redirect-only alias of `TryOn`.
    Recommendations,
}

impl View {
    pub const ALL: [View; 4] = [
        View::TryOn,
        View::BrandGallery,
        View::OutfitCreator,
        View::Recommendations,
    ];

    pub fn path(self) -> &'static str {
        match self {
            View::TryOn => "/",
            View::BrandGallery => "/gallery",
            View::OutfitCreator => "/new-outfit",
            View::Recommendations => "/generate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            View::TryOn => "Home",
            View::BrandGallery => "Brand Showcase",
            View::OutfitCreator => "AI Creator",
            View::Recommendations => "Recommendations",
        }
    }

    /// Unknown paths land on the home view.
    pub fn from_path(path: &str) -> View {
        let path = path.trim();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        View::ALL
            .into_iter()
            .find(|view| view.path() == path)
            .unwrap_or(View::TryOn)
    }

    pub fn resolve(self) -> View {
        match self {
            View::Recommendations => View::TryOn,
            other => other,
        }
    }
}

pub enum ActiveView {
    TryOn(TryOnController),
    BrandGallery(CatalogBrowser),
    OutfitCreator(OutfitCreator),
}

impl ActiveView {
    fn mount(view: View, source: &Arc<dyn CatalogSource>, runtime: &Handle) -> Self {
        match view.resolve() {
            View::BrandGallery => {
                ActiveView::BrandGallery(CatalogBrowser::mount(Arc::clone(source), runtime.clone()))
            }
            View::OutfitCreator => ActiveView::OutfitCreator(OutfitCreator::new(runtime.clone())),
            View::TryOn | View::Recommendations => {
                ActiveView::TryOn(TryOnController::mount(Arc::clone(source), runtime.clone()))
            }
        }
    }

    pub fn process_events(&mut self) -> usize {
        match self {
            ActiveView::TryOn(controller) => controller.process_events(),
            ActiveView::BrandGallery(browser) => browser.process_events(),
            ActiveView::OutfitCreator(creator) => creator.process_events(),
        }
    }
}

pub struct Navigator {
    source: Arc<dyn CatalogSource>,
    runtime: Handle,
    current: View,
    active: ActiveView,
}

impl Navigator {
    pub fn new(source: Arc<dyn CatalogSource>, runtime: Handle) -> Self {
        Self::with_start(source, runtime, View::TryOn)
    }

    /// Mounts only `start` (after alias resolution), so startup issues a single fetch.
    pub fn with_start(source: Arc<dyn CatalogSource>, runtime: Handle, start: View) -> Self {
        let current = start.resolve();
        let active = ActiveView::mount(current, &source, &runtime);
        Self {
            source,
            runtime,
            current,
            active,
        }
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn active(&self) -> &ActiveView {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut ActiveView {
        &mut self.active
    }

    /// Returns the view actually shown; staying on the same view keeps it.
    pub fn navigate(&mut self, requested: View) -> View {
        let target = requested.resolve();
        if target == self.current {
            return target;
        }
        info!(from = self.current.path(), to = target.path(), "navigating");
        // The old controller is dropped here, cancelling its pending work.
        self.active = ActiveView::mount(target, &self.source, &self.runtime);
        self.current = target;
        target
    }

    pub fn navigate_path(&mut self, path: &str) -> View {
        self.navigate(View::from_path(path))
    }

    pub fn process_events(&mut self) -> usize {
        self.active.process_events()
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
