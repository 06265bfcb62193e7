//! End-to-end tests for the HTTP surface, driven through the router
//! without binding a service port. Pictogram lookups go to a local stub
//! that mimics the remote search API.

use axum::body::Body;
use axum::extract::Path;
use axum::http::{Request, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use echovox_simplify::config::PictogramsConfig;
use echovox_simplify::pictograms::PictogramService;
use echovox_simplify::server::{AppState, build_router};
use echovox_simplify::simplify::TextSimplifier;

/// Stub search endpoint: knows two English keywords, 404s everything else
/// the way the real API signals "no matches".
async fn pictogram_stub(
    Path((locale, keyword)): Path<(String, String)>,
) -> axum::response::Response {
    if locale != "en" {
        return StatusCode::NOT_FOUND.into_response();
    }
    match keyword.as_str() {
        "hello" => Json(json!([{"_id": 1001, "keywords": [{"keyword": "hello"}]}])).into_response(),
        "world" => Json(json!([{"_id": 1002, "keywords": [{"keyword": "world"}]}])).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn serve_pictogram_stub() -> String {
    let router = Router::new().route("/pictograms/{locale}/search/{keyword}", get(pictogram_stub));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Service router with the deterministic simplifier and lookups pointed at
/// `api_base`.
fn app(api_base: String) -> Router {
    let pictograms = PictogramService::from_config(&PictogramsConfig {
        api_base_url: api_base,
        timeout_seconds: 2,
    })
    .unwrap();
    build_router(AppState::new(TextSimplifier::fallback_only(), pictograms))
}

async fn post_json(router: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_health_reports_expected_identity() {
    let app = app("http://127.0.0.1:1".to_string());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        value,
        json!({"status": "ok", "service": "python-simplification"})
    );
}

#[tokio::test]
async fn test_simplify_runs_the_full_pipeline() {
    let base = serve_pictogram_stub().await;
    let (status, body) = post_json(
        app(base),
        "/simplify",
        json!({"text": "Hello world; this is complex: very complex indeed."}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["original_text"],
        "Hello world; this is complex: very complex indeed."
    );
    assert_eq!(
        body["simplified_text"],
        "Hello world. this is complex. very complex indeed."
    );

    // Keywords come from the simplified text; only two resolve remotely.
    let pictograms = body["pictograms"].as_array().unwrap();
    assert_eq!(pictograms.len(), 2);
    assert_eq!(pictograms[0]["keyword"], "hello");
    assert_eq!(pictograms[0]["id"], 1001);
    assert!(
        pictograms[0]["url"]
            .as_str()
            .unwrap()
            .ends_with("/pictograms/1001")
    );
    assert_eq!(pictograms[1]["keyword"], "world");
}

#[tokio::test]
async fn test_simplify_forwards_the_requested_locale() {
    // The stub only speaks English, so a French request finds nothing but
    // the simplification itself still succeeds.
    let base = serve_pictogram_stub().await;
    let (status, body) = post_json(
        app(base),
        "/simplify",
        json!({"text": "Hello world; this is complex: very complex indeed.", "locale": "fr"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["simplified_text"],
        "Hello world. this is complex. very complex indeed."
    );
    assert_eq!(body["pictograms"], json!([]));
}

#[tokio::test]
async fn test_pictograms_resolves_caller_keywords() {
    let base = serve_pictogram_stub().await;
    let (status, body) = post_json(
        app(base),
        "/pictograms",
        json!({"keywords": ["world", "missing"], "locale": "en"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let pictograms = body["pictograms"].as_array().unwrap();
    assert_eq!(pictograms.len(), 1);
    assert_eq!(pictograms[0]["keyword"], "world");
    assert_eq!(pictograms[0]["text"], "world");
    assert!(
        pictograms[0]["url"]
            .as_str()
            .unwrap()
            .ends_with("/pictograms/1002")
    );
}

#[tokio::test]
async fn test_pictograms_empty_keyword_list_is_empty_response() {
    // No keywords means no lookups; the unroutable base never gets hit.
    let (status, body) = post_json(
        app("http://127.0.0.1:1".to_string()),
        "/pictograms",
        json!({"keywords": []}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"pictograms": []}));
}

#[tokio::test]
async fn test_unreachable_pictogram_service_degrades_to_empty_list() {
    let (status, body) = post_json(
        app("http://127.0.0.1:1".to_string()),
        "/simplify",
        json!({"text": "Hello world; this is complex: very complex indeed."}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["simplified_text"],
        "Hello world. this is complex. very complex indeed."
    );
    assert_eq!(body["pictograms"], json!([]));
}

#[tokio::test]
async fn test_malformed_bodies_are_client_errors() {
    let app = app("http://127.0.0.1:1".to_string());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/simplify")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    // Valid JSON missing the required field is rejected the same way.
    let (status, _) = post_json(app, "/simplify", json!({"locale": "en"})).await;
    assert!(status.is_client_error());
}
