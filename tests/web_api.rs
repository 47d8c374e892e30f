// HTTP API tests: drive the router in-process with tower's oneshot.
//
// Each test builds a fresh router over an in-memory database and the mock
// analyzer, so no sockets or network calls are involved.

#![cfg(feature = "web")]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use gleaner::analysis::mock::MockAnalyzer;
use gleaner::analysis::traits::{LlmAnalysis, TextAnalyzer};
use gleaner::config::{AnalyzerBackend, Config, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};
use gleaner::db;
use gleaner::web::{build_router, AppState};

const AI_TEXT: &str = "OpenAI released a new AI model. The data shows improvements in accuracy.";

fn test_config() -> Config {
    Config {
        db_path: ":memory:".to_string(),
        analyzer_backend: AnalyzerBackend::Mock,
        openai_api_key: String::new(),
        openai_model: DEFAULT_OPENAI_MODEL.to_string(),
        openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        top_k: 3,
    }
}

fn app_with(analyzer: Arc<dyn TextAnalyzer>) -> Router {
    build_router(AppState {
        db: db::in_memory().unwrap(),
        analyzer,
        config: Arc::new(test_config()),
    })
}

fn app() -> Router {
    app_with(Arc::new(MockAnalyzer))
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// ============================================================
// POST /analyze
// ============================================================

#[tokio::test]
async fn analyze_single_text() {
    let app = app();
    let (status, body) = send(&app, post_json("/analyze", serde_json::json!({ "text": AI_TEXT }))).await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["topics"], serde_json::json!(["AI", "Data", "General"]));
    assert_eq!(
        results[0]["keywords"],
        serde_json::json!(["improvements", "accuracy"])
    );
    assert_eq!(results[0]["sentiment"], "neutral");
    assert_eq!(results[0]["title"], Value::Null);
    assert_eq!(results[0]["confidence"], 0.3);
}

#[tokio::test]
async fn analyze_batch_skips_blank_entries() {
    let app = app();
    let (status, body) = send(
        &app,
        post_json(
            "/analyze",
            serde_json::json!({ "texts": ["Cloud bills grew.", "   ", AI_TEXT] }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn analyze_empty_body_is_bad_request() {
    let app = app();
    for body in [
        serde_json::json!({}),
        serde_json::json!({ "text": "  " }),
        serde_json::json!({ "texts": [] }),
    ] {
        let (status, json) = send(&app, post_json("/analyze", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("Input text is empty"));
    }
}

struct DownAnalyzer;

#[async_trait]
impl TextAnalyzer for DownAnalyzer {
    async fn analyze(&self, _text: &str) -> anyhow::Result<LlmAnalysis> {
        anyhow::bail!("connection refused")
    }
}

#[tokio::test]
async fn analyzer_failure_is_bad_gateway() {
    let app = app_with(Arc::new(DownAnalyzer));
    let (status, json) = send(&app, post_json("/analyze", serde_json::json!({ "text": AI_TEXT }))).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let message = json["error"].as_str().unwrap();
    assert!(message.starts_with("Analysis failed"));
    assert!(message.contains("connection refused"));
}

// ============================================================
// GET /search
// ============================================================

#[tokio::test]
async fn search_returns_stored_matches() {
    let app = app();
    send(&app, post_json("/analyze", serde_json::json!({ "text": AI_TEXT }))).await;

    let (status, body) = send(&app, get("/search?topic=AI")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["results"].as_array().unwrap().is_empty());

    let (_, body) = send(&app, get("/search?topic=accuracy")).await;
    assert_eq!(body["results"].as_array().unwrap().len(), 1);

    let (_, body) = send(&app, get("/search?topic=sports")).await;
    assert!(body["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn search_without_topic_is_bad_request() {
    let app = app();
    let response = app.oneshot(get("/search")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================
// GET /analyses, /analyses/{id}, /health
// ============================================================

#[tokio::test]
async fn list_and_fetch_analyses() {
    let app = app();
    let (_, created) = send(&app, post_json("/analyze", serde_json::json!({ "text": AI_TEXT }))).await;
    let id = created["results"][0]["id"].as_i64().unwrap();

    let (status, body) = send(&app, get("/analyses?limit=10")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["results"][0]["id"], id);

    let (status, body) = send(&app, get(&format!("/analyses/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created["results"][0]);
}

#[tokio::test]
async fn unknown_analysis_is_not_found() {
    let app = app();
    let (status, body) = send(&app, get("/analyses/9999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Analysis not found");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
