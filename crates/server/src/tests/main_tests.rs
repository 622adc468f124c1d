use super::*;
use axum::{body, body::Body, http::Request};
use shared::domain::{CatalogItemId, Category};
use tower::ServiceExt;

fn test_app() -> Router {
    let catalog = load_catalog(None).expect("builtin catalog");
    build_router(Arc::new(AppState::new(catalog)))
}

#[tokio::test]
async fn healthz_reports_ok() {
    let request = Request::get("/healthz").body(Body::empty()).expect("request");
    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(body.as_ref(), b"ok");
}

#[tokio::test]
async fn catalog_route_returns_grouped_payload() {
    let request = Request::get("/api/clothing")
        .body(Body::empty())
        .expect("request");
    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let raw: serde_json::Value = serde_json::from_slice(&body).expect("json");
    assert!(raw["brandItems"]["dresses"].is_array());
    assert!(raw["brandItems"]["casual"].is_array());
    assert!(raw["savedOutfits"].is_array());

    let payload: CatalogPayload = serde_json::from_slice(&body).expect("payload");
    assert_eq!(
        payload.items(Category::Dresses)[0].id,
        CatalogItemId(1),
        "fixture order is preserved"
    );
}

#[tokio::test]
async fn unknown_route_returns_api_error() {
    let request = Request::get("/api/shoes")
        .body(Body::empty())
        .expect("request");
    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let err: ApiError = serde_json::from_slice(&body).expect("api error");
    assert_eq!(err.code, ErrorCode::NotFound);
    assert!(err.message.contains("/api/shoes"));
}
