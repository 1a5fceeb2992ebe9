//! HTTP-level tests for the dork API, driven through the axum router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use dorkgen_backend::api;
use dorkgen_backend::config::{AppConfig, SearchConfig};
use dorkgen_backend::server::build_app;
use dorkgen_backend::state::AppState;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    api::router(Arc::new(AppState::default()))
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

// ── generate ───────────────────────────────────────────────────

#[tokio::test]
async fn generate_returns_query_and_encoded_url() {
    let app = test_app();
    let body = json!({
        "domain": "example.com",
        "keywords": [],
        "fileTypes": ["pdf"],
        "vulnerability": ["directory_listing"],
        "cms": [],
        "auth": [],
        "errors": []
    });

    let (status, body) = send(&app, json_request(Method::POST, "/api/generate", &body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], r#"site:example.com filetype:pdf intitle:"index of""#);
    assert_eq!(
        body["url"],
        "https://www.google.com/search?q=site%3Aexample.com%20filetype%3Apdf%20intitle%3A%22index%20of%22"
    );
}

#[tokio::test]
async fn generate_with_only_domain() {
    let app = test_app();
    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/generate", r#"{"domain":"example.com"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "site:example.com");
}

#[tokio::test]
async fn generate_ignores_unknown_selectors() {
    let app = test_app();
    let body = json!({
        "domain": "example.com",
        "fileTypes": ["exe"],
        "cms": ["magento", "wordpress"],
        "errors": ["segfault"]
    });

    let (status, body) = send(&app, json_request(Method::POST, "/api/generate", &body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["query"],
        r#"site:example.com intext:"powered by wordpress" OR intext:"wp-content""#
    );
}

#[tokio::test]
async fn generate_raw_url_when_encoding_disabled() {
    let search = SearchConfig {
        encode_query: false,
        ..Default::default()
    };
    let app = api::router(Arc::new(AppState::new(search)));

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/generate", r#"{"domain":"example.com","fileTypes":["sql"]}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "https://www.google.com/search?q=site:example.com filetype:sql");
}

#[tokio::test]
async fn generate_rejects_malformed_body() {
    let app = test_app();
    let (status, body) = send(&app, json_request(Method::POST, "/api/generate", "{ nope")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn generate_rejects_missing_domain() {
    let app = test_app();
    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/generate", r#"{"keywords":["x"]}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("domain"));
}

#[tokio::test]
async fn generate_rejects_null_domain() {
    let app = test_app();
    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/generate", r#"{"domain":null}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("null"));
}

// ── saved dorks ────────────────────────────────────────────────

#[tokio::test]
async fn save_list_delete_flow() {
    let app = test_app();
    let entry = r#"{"name":"test","query":"q","description":"d"}"#;

    let (status, first) = send(&app, json_request(Method::POST, "/api/dorks", entry)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first, json!({"id": 1, "name": "test", "query": "q", "description": "d"}));

    let (status, second) = send(&app, json_request(Method::POST, "/api/dorks", entry)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second["id"], 2);

    let (status, body) = send(&app, empty_request(Method::DELETE, "/api/dorks/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Dork deleted successfully");

    let (status, list) = send(&app, empty_request(Method::GET, "/api/dorks")).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2]);
}

#[tokio::test]
async fn list_starts_empty() {
    let app = test_app();
    let (status, list) = send(&app, empty_request(Method::GET, "/api/dorks")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn save_rejects_malformed_body() {
    let app = test_app();
    let (status, body) = send(&app, json_request(Method::POST, "/api/dorks", "[1, 2")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, list) = send(&app, empty_request(Method::GET, "/api/dorks")).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn save_ignores_client_id() {
    let app = test_app();
    let (status, saved) = send(
        &app,
        json_request(Method::POST, "/api/dorks", r#"{"id":77,"name":"n","query":"q"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(saved["id"], 1);
    assert_eq!(saved["description"], "");
}

#[tokio::test]
async fn delete_invalid_id_is_bad_request() {
    let app = test_app();
    let (status, body) = send(&app, empty_request(Method::DELETE, "/api/dorks/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid ID format");
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let app = test_app();
    let (status, body) = send(&app, empty_request(Method::DELETE, "/api/dorks/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Dork not found");

    let (status, _) = send(&app, empty_request(Method::DELETE, "/api/dorks/-1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_twice_is_not_found() {
    let app = test_app();
    send(&app, json_request(Method::POST, "/api/dorks", r#"{"name":"a","query":"q","description":"d"}"#)).await;

    let (status, _) = send(&app, empty_request(Method::DELETE, "/api/dorks/1")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, empty_request(Method::DELETE, "/api/dorks/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── categories / health ────────────────────────────────────────

#[tokio::test]
async fn categories_list_vocabulary() {
    let app = test_app();
    let (status, body) = send(&app, empty_request(Method::GET, "/api/categories")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "fileTypes": ["pdf", "doc", "xls", "zip", "sql", "php", "asp"],
            "vulnerability": ["directory_listing", "exposed_config", "database_exposure", "log_files", "backup_files"],
            "cms": ["wordpress", "joomla", "drupal", "phpinfo"],
            "auth": ["login", "admin", "password", "user_list"],
            "errors": ["sql_error", "server_error", "stack_trace", "debug_info"]
        })
    );
}

#[tokio::test]
async fn health_reports_saved_count() {
    let app = test_app();
    send(&app, json_request(Method::POST, "/api/dorks", r#"{"name":"a","query":"q","description":"d"}"#)).await;

    let (status, body) = send(&app, empty_request(Method::GET, "/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["saved_dorks"], 1);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

// ── middleware ─────────────────────────────────────────────────

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let app = build_app(&AppConfig::default(), Arc::new(AppState::default())).unwrap();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/generate")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn cors_rejects_unknown_origin() {
    let app = build_app(&AppConfig::default(), Arc::new(AppState::default())).unwrap();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/categories")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
