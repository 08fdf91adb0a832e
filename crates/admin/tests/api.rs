//! Router-level tests for the admin JSON API.
//!
//! Each test mounts a `wiremock` catalog backend and drives the full router
//! with `tower::ServiceExt::oneshot`. The router is cloned between requests
//! so editor state carries over.

use std::net::IpAddr;

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;
use url::Url;
use wiremock::matchers::{body_json, header as header_eq, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use maison_admin::config::{AdminConfig, BackendConfig};
use maison_admin::state::AppState;

const TOKEN: &str = "test-admin-token";

fn test_app(server: &MockServer) -> axum::Router {
    let config = AdminConfig {
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        backend: BackendConfig {
            base_url: Url::parse(&format!("{}/", server.uri())).expect("backend url"),
            admin_token: SecretString::from(TOKEN),
        },
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.1,
    };
    maison_admin::app(AppState::new(config))
}

async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

fn json_body(body: &str) -> Value {
    serde_json::from_str(body).expect("json body")
}

async fn overlay_visible(app: &axum::Router, page: &str, overlay: &str) -> bool {
    let (_, body) = send(app, Method::GET, "/api/overlays", None).await;
    json_body(&body)
        .as_array()
        .expect("overlay list")
        .iter()
        .any(|e| e["page"] == page && e["overlay"] == overlay && e["visible"] == true)
}

async fn mount_product(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("ids", "p1"))
        .and(header_eq("authorization", "Bearer test-admin-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "p1",
            "name": "Linen Shirt",
            "highlights": {
                "headline": "<p>Breathable</p>",
                "keyPoints": [
                    {"text": "Relaxed fit", "index": 2},
                    {"text": "Pure linen", "index": 1}
                ]
            }
        }])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn health_returns_ok() {
    let server = MockServer::start().await;
    let app = test_app(&server);

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn loading_highlights_orders_key_points_and_opens_overlay() {
    let server = MockServer::start().await;
    mount_product(&server).await;
    let app = test_app(&server);

    assert!(!overlay_visible(&app, "editProduct", "highlights").await);

    let (status, body) = send(&app, Method::GET, "/api/products/p1/highlights", None).await;
    assert_eq!(status, StatusCode::OK);

    let editor = json_body(&body);
    assert_eq!(editor["id"], "p1");
    assert_eq!(editor["name"], "Linen Shirt");
    assert_eq!(editor["highlights"]["headline"], "<p>Breathable</p>");
    let points = editor["highlights"]["keyPoints"].as_array().expect("key points");
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["text"], "Pure linen");
    assert_eq!(points[0]["order"], 1);
    assert_eq!(points[1]["text"], "Relaxed fit");
    assert_eq!(points[1]["order"], 2);

    assert!(overlay_visible(&app, "editProduct", "highlights").await);
}

#[tokio::test]
async fn loading_unknown_product_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let app = test_app(&server);

    let (status, _) = send(&app, Method::GET, "/api/products/missing/highlights", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!overlay_visible(&app, "editProduct", "highlights").await);
}

#[tokio::test]
async fn saving_highlights_patches_in_visual_order() {
    let server = MockServer::start().await;
    mount_product(&server).await;
    Mock::given(method("PATCH"))
        .and(path("/products/p1"))
        .and(header_eq("authorization", "Bearer test-admin-token"))
        .and(body_json(json!({
            "id": "p1",
            "highlights": {
                "headline": "<p>Cool all summer</p>",
                "keyPoints": [
                    {"text": "Relaxed fit", "index": 1},
                    {"text": "Pure linen", "index": 2}
                ]
            }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"type": "SUCCESS", "message": "Product updated"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let app = test_app(&server);

    send(&app, Method::GET, "/api/products/p1/highlights", None).await;

    let draft = json!({
        "headline": "<p>Cool all summer</p>",
        "keyPoints": [
            {"id": "6f1c2b84-3f0e-4c55-9b4e-0d7a1f2c3b4d", "text": "Pure linen", "order": 2},
            {"id": "0a9e8d7c-6b5a-4f3e-8d2c-1b0a9f8e7d6c", "text": "Relaxed fit", "order": 1}
        ]
    });
    let (status, body) = send(&app, Method::PUT, "/api/products/p1/highlights", Some(draft)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_body(&body),
        json!({"type": "SUCCESS", "message": "Product updated"})
    );

    let (_, alert) = send(&app, Method::GET, "/api/alerts", None).await;
    assert_eq!(json_body(&alert)["message"], "Product updated");
    assert!(!overlay_visible(&app, "editProduct", "highlights").await);
}

#[tokio::test]
async fn failed_highlights_save_posts_fallback_and_closes_overlay() {
    let server = MockServer::start().await;
    mount_product(&server).await;
    Mock::given(method("PATCH"))
        .and(path("/products/p1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    let app = test_app(&server);

    send(&app, Method::GET, "/api/products/p1/highlights", None).await;
    assert!(overlay_visible(&app, "editProduct", "highlights").await);

    let draft = json!({"headline": "", "keyPoints": []});
    let (status, body) = send(&app, Method::PUT, "/api/products/p1/highlights", Some(draft)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_body(&body),
        json!({"type": "ERROR", "message": "Failed to update product"})
    );
    assert!(!overlay_visible(&app, "editProduct", "highlights").await);
}

#[tokio::test]
async fn collections_are_listed_by_index() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "c-late", "index": 5, "title": "Sale", "slug": "sale",
                "collectionType": "FEATURED", "visibility": "HIDDEN",
                "products": [{"id": "p1", "index": 1}]
            },
            {
                "id": "c-early", "index": 1, "title": "New Arrivals", "slug": "new-arrivals",
                "collectionType": "FEATURED", "visibility": "PUBLISHED"
            }
        ])))
        .mount(&server)
        .await;
    let app = test_app(&server);

    let (status, body) = send(&app, Method::GET, "/api/storefront/collections", None).await;
    assert_eq!(status, StatusCode::OK);

    let rows = json_body(&body);
    let ids: Vec<&str> = rows
        .as_array()
        .expect("collection rows")
        .iter()
        .filter_map(|row| row["id"].as_str())
        .collect();
    assert_eq!(ids, ["c-early", "c-late"]);
    assert_eq!(rows[1]["productCount"], 1);
    assert_eq!(rows[1]["visibility"], "HIDDEN");
}

#[tokio::test]
async fn non_digit_index_is_rejected_without_backend_call() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let app = test_app(&server);

    send(
        &app,
        Method::POST,
        "/api/overlays/storefront/changeCollectionIndex/show",
        None,
    )
    .await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/storefront/collections/c1/index",
        Some(json!({"index": "-3"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, alert) = send(&app, Method::GET, "/api/alerts", None).await;
    assert_eq!(json_body(&alert), Value::Null);
    assert!(overlay_visible(&app, "storefront", "changeCollectionIndex").await);
}

#[tokio::test]
async fn changing_index_posts_alert_until_dismissed() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/collections/c1/index"))
        .and(body_json(json!({"id": "c1", "index": 12})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"type": "SUCCESS", "message": "Collection moved"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let app = test_app(&server);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/storefront/collections/c1/index",
        Some(json!({"index": "12"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["type"], "SUCCESS");

    let (_, alert) = send(&app, Method::GET, "/api/alerts", None).await;
    assert_eq!(json_body(&alert)["message"], "Collection moved");

    let (status, _) = send(&app, Method::DELETE, "/api/alerts", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, alert) = send(&app, Method::GET, "/api/alerts", None).await;
    assert_eq!(json_body(&alert), Value::Null);
}

#[tokio::test]
async fn failed_index_change_posts_fallback_and_closes_overlay() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/collections/c1/index"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;
    let app = test_app(&server);

    send(
        &app,
        Method::POST,
        "/api/overlays/storefront/changeCollectionIndex/show",
        None,
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/storefront/collections/c1/index",
        Some(json!({"index": "4"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_body(&body),
        json!({"type": "ERROR", "message": "Failed to change product index"})
    );
    assert!(!overlay_visible(&app, "storefront", "changeCollectionIndex").await);
}

#[tokio::test]
async fn empty_index_moves_collection_to_zero() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/collections/c1/index"))
        .and(body_json(json!({"id": "c1", "index": 0})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"type": "SUCCESS", "message": "ok"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let app = test_app(&server);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/storefront/collections/c1/index",
        Some(json!({"index": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn overlays_can_be_toggled() {
    let server = MockServer::start().await;
    let app = test_app(&server);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/overlays/storefront/changeCollectionIndex/show",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["visible"], true);
    assert!(overlay_visible(&app, "storefront", "changeCollectionIndex").await);

    send(
        &app,
        Method::POST,
        "/api/overlays/storefront/changeCollectionIndex/hide",
        None,
    )
    .await;
    assert!(!overlay_visible(&app, "storefront", "changeCollectionIndex").await);

    send(&app, Method::POST, "/api/overlays/orders/refund/show", None).await;
    assert!(overlay_visible(&app, "orders", "refund").await);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let server = MockServer::start().await;
    let app = test_app(&server);

    let (status, _) = send(&app, Method::GET, "/api/nothing-here", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
