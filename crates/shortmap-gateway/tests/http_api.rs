use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use shortmap_gateway::{App, AppState};
use shortmap_registry::Registry;
use shortmap_resolver::Resolver;
use shortmap_storage::MemoryStore;
use tower::ServiceExt;

async fn app() -> Router {
    let store = Arc::new(MemoryStore::new());
    let registry = Arc::new(Registry::open(Arc::clone(&store)).await.unwrap());
    let resolver = Resolver::new(store);
    App::router(AppState::new(registry, resolver))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn create_then_redirect() {
    let app = app().await;

    let (status, body) = get(&app, "/c?url=http://a.example/&ext=news").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["new"], true);
    assert_eq!(body["info"]["url"], "http://a.example/");
    assert_eq!(body["info"]["ext"], "news");

    let code = body["code"].as_str().unwrap().to_owned();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/{code}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "http://a.example/"
    );
}

#[tokio::test]
async fn repeated_create_is_idempotent() {
    let app = app().await;

    let (_, first) = get(&app, "/c?url=http://a.example/").await;
    let (_, second) = get(&app, "/c?url=http://a.example/").await;

    assert_eq!(first["new"], true);
    assert_eq!(second["new"], false);
    assert_eq!(first["code"], second["code"]);
}

#[tokio::test]
async fn create_with_form_body() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/c")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from("url=http%3A%2F%2Fa.example%2F&ext=x"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["info"]["url"], "http://a.example/");
}

#[tokio::test]
async fn empty_url_is_rejected() {
    let app = app().await;

    let (status, body) = get(&app, "/c?url=%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "url is empty");
}

#[tokio::test]
async fn unknown_code_is_not_found() {
    let app = app().await;

    let (status, body) = get(&app, "/doesnotexist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn counter_snapshot_and_save() {
    let app = app().await;

    let (status, body) = get(&app, "/n").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], 10_000);

    get(&app, "/c?url=http://a.example/").await;

    let (_, body) = get(&app, "/n").await;
    assert_eq!(body["value"], 10_001);

    let (status, body) = get(&app, "/save").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "saved");
}

#[tokio::test]
async fn health_endpoint() {
    let app = app().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn distinct_pairs_get_distinct_codes() {
    let app = app().await;

    let (_, a) = get(&app, "/c?url=http://a.example/").await;
    let (_, b) = get(&app, "/c?url=http://b.example/").await;

    assert_ne!(a["code"], b["code"]);
}
