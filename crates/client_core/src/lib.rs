//! View controllers for the virtual try-on studio.
//!
//! Each view owns its state outright: it fetches its own copy of the
//! catalog, runs its own simulated delays, and tears all of it down when
//! dropped. The front-ends only call operations and read state back.

pub mod browser;
pub mod catalog;
pub mod error;
pub mod navigation;
pub mod outfit_creator;
pub mod source;
pub mod tasks;
pub mod try_on;

pub use browser::CatalogBrowser;
pub use catalog::CatalogState;
pub use error::CatalogError;
pub use navigation::{ActiveView, Navigator, View};
pub use outfit_creator::{
    CreateRejected, OutfitCreator, PreferenceField, PreferenceSelection, OUTFIT_CREATION_DELAY,
};
pub use source::{resolve_image_url, CatalogSource, HttpCatalogSource, StaticCatalogSource};
pub use tasks::{OperationToken, ViewTasks};
pub use try_on::{TryOnController, TRY_ON_DELAY};

#[cfg(test)]
#[path = "tests/fixtures.rs"]
mod fixtures;
