use super::*;

use axum::{http::StatusCode, routing::get, Json, Router};
use shared::error::ErrorCode;
use tokio::net::TcpListener;

use crate::fixtures::sample_payload;

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn fetches_payload_from_catalog_route() {
    let router = Router::new().route(
        CATALOG_ROUTE,
        get(|| async { Json(sample_payload()) }),
    );
    let base_url = serve(router).await;

    let source = HttpCatalogSource::new(&base_url).expect("source");
    let payload = source.fetch_catalog().await.expect("payload");
    assert_eq!(payload, sample_payload());
}

#[tokio::test]
async fn error_status_surfaces_api_error_message() {
    let router = Router::new().route(
        CATALOG_ROUTE,
        get(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiError::new(ErrorCode::Unavailable, "catalog offline")),
            )
        }),
    );
    let base_url = serve(router).await;

    let err = HttpCatalogSource::new(&base_url)
        .expect("source")
        .fetch_catalog()
        .await
        .expect_err("status error");
    match err {
        CatalogError::Status { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "catalog offline");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let router = Router::new().route(CATALOG_ROUTE, get(|| async { "not json" }));
    let base_url = serve(router).await;

    let err = HttpCatalogSource::new(&base_url)
        .expect("source")
        .fetch_catalog()
        .await
        .expect_err("decode error");
    assert!(matches!(err, CatalogError::Decode(_)));
}

#[tokio::test]
async fn invalid_payload_is_rejected() {
    let router = Router::new().route(
        CATALOG_ROUTE,
        get(|| async {
            let mut payload = sample_payload();
            payload.brand_items.casual[0].id = payload.brand_items.dresses[0].id;
            Json(payload)
        }),
    );
    let base_url = serve(router).await;

    let err = HttpCatalogSource::new(&base_url)
        .expect("source")
        .fetch_catalog()
        .await
        .expect_err("invalid payload");
    assert!(matches!(err, CatalogError::Invalid(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = HttpCatalogSource::new(&format!("http://{addr}"))
        .expect("source")
        .fetch_catalog()
        .await
        .expect_err("transport error");
    assert!(matches!(err, CatalogError::Transport(_)));
}

#[test]
fn endpoint_keeps_base_path_prefix() {
    let source = HttpCatalogSource::new("http://shop.example/studio").expect("source");
    assert_eq!(
        source.endpoint().as_str(),
        "http://shop.example/studio/api/clothing"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    assert!(matches!(
        HttpCatalogSource::new("not a url"),
        Err(CatalogError::InvalidUrl { .. })
    ));
}

#[test]
fn image_references_resolve_against_server() {
    let base = Url::parse("http://127.0.0.1:8443/").expect("base");
    assert_eq!(
        resolve_image_url(&base, "/images/gown.jpg")
            .expect("relative")
            .as_str(),
        "http://127.0.0.1:8443/images/gown.jpg"
    );
    assert_eq!(
        resolve_image_url(&base, "https://cdn.example/gown.jpg")
            .expect("absolute")
            .as_str(),
        "https://cdn.example/gown.jpg"
    );
}

#[tokio::test]
async fn static_source_counts_fetches() {
    let source = StaticCatalogSource::new(sample_payload());
    source.fetch_catalog().await.expect("payload");
    source.fetch_catalog().await.expect("payload");
    assert_eq!(source.fetch_count(), 2);

    let failing = StaticCatalogSource::failing("offline");
    assert!(matches!(
        failing.fetch_catalog().await,
        Err(CatalogError::Unavailable(reason)) if reason == "offline"
    ));
}
