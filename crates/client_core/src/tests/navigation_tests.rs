use super::*;

use std::time::Duration;

use shared::domain::{CatalogItemId, TryOnPhase};

use crate::fixtures::{as_source, sample_payload, static_source};

#[test]
fn paths_map_to_views() {
    assert_eq!(View::from_path("/"), View::TryOn);
    assert_eq!(View::from_path("/gallery"), View::BrandGallery);
    assert_eq!(View::from_path("/gallery/"), View::BrandGallery);
    assert_eq!(View::from_path("/new-outfit"), View::OutfitCreator);
    assert_eq!(View::from_path("/generate"), View::Recommendations);
    assert_eq!(View::from_path("/nowhere"), View::TryOn);
}

#[test]
fn recommendations_redirects_home() {
    assert_eq!(View::Recommendations.resolve(), View::TryOn);
    assert_eq!(View::BrandGallery.resolve(), View::BrandGallery);
}

#[tokio::test]
async fn every_view_entry_fetches_its_own_catalog() {
    let source = static_source(sample_payload());
    let mut navigator = Navigator::new(as_source(&source), Handle::current());
    assert_eq!(navigator.current(), View::TryOn);
    if let ActiveView::TryOn(controller) = navigator.active_mut() {
        assert!(controller.next_event().await);
    }

    assert_eq!(navigator.navigate(View::BrandGallery), View::BrandGallery);
    let ActiveView::BrandGallery(browser) = navigator.active_mut() else {
        panic!("expected gallery view");
    };
    assert!(browser.next_event().await);

    assert_eq!(navigator.navigate_path("/"), View::TryOn);
    if let ActiveView::TryOn(controller) = navigator.active_mut() {
        assert!(controller.next_event().await);
    }
    assert_eq!(source.fetch_count(), 3);
}

#[tokio::test]
async fn starting_on_the_gallery_fetches_once() {
    let source = static_source(sample_payload());
    let mut navigator =
        Navigator::with_start(as_source(&source), Handle::current(), View::BrandGallery);
    assert_eq!(navigator.current(), View::BrandGallery);
    let ActiveView::BrandGallery(browser) = navigator.active_mut() else {
        panic!("expected gallery view");
    };
    assert!(browser.next_event().await);
    assert!(browser.catalog().is_loaded());
    assert!(!browser.next_event().await);
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn starting_on_an_alias_lands_on_its_target() {
    let source = static_source(sample_payload());
    let navigator = Navigator::with_start(
        as_source(&source),
        Handle::current(),
        View::from_path("/generate"),
    );
    assert_eq!(navigator.current(), View::TryOn);
    assert!(matches!(navigator.active(), ActiveView::TryOn(_)));
}

#[tokio::test]
async fn staying_on_a_view_keeps_its_controller() {
    let source = static_source(sample_payload());
    let mut navigator = Navigator::new(as_source(&source), Handle::current());
    if let ActiveView::TryOn(controller) = navigator.active_mut() {
        controller.next_event().await;
    }

    assert_eq!(navigator.navigate(View::Recommendations), View::TryOn);
    assert_eq!(navigator.navigate(View::TryOn), View::TryOn);
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn outfit_creator_does_not_fetch() {
    let source = static_source(sample_payload());
    let mut navigator = Navigator::new(as_source(&source), Handle::current());
    if let ActiveView::TryOn(controller) = navigator.active_mut() {
        controller.next_event().await;
    }

    navigator.navigate(View::OutfitCreator);
    assert!(matches!(navigator.active(), ActiveView::OutfitCreator(_)));
    assert_eq!(navigator.process_events(), 0);
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn leaving_mid_try_on_tears_the_run_down() {
    let source = static_source(sample_payload());
    let mut navigator = Navigator::new(as_source(&source), Handle::current());
    if let ActiveView::TryOn(controller) = navigator.active_mut() {
        controller.next_event().await;
        controller.select_item_by_id(CatalogItemId(1));
        assert!(controller.start_try_on());
    }

    navigator.navigate(View::BrandGallery);
    navigator.navigate(View::TryOn);
    tokio::time::sleep(Duration::from_secs(5)).await;
    navigator.process_events();

    let ActiveView::TryOn(controller) = navigator.active() else {
        panic!("expected try-on view");
    };
    assert_eq!(controller.phase(), TryOnPhase::Idle);
    assert!(controller.selected().is_none());
    assert!(controller.result_image().is_none());
}
