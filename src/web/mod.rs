// Web server: Axum-based JSON API.
//
// Routes:
//   POST /analyze         - analyze one text or a batch, store the results
//   GET  /search?topic=   - topic/keyword substring search over stored analyses
//   GET  /analyses        - most recent analyses
//   GET  /analyses/{id}   - a single stored analysis
//   GET  /health          - liveness probe
//
// No auth: the API is meant to run on a trusted network or behind a proxy.

use std::sync::Arc;

use anyhow::Result;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::analysis::traits::TextAnalyzer;
use crate::config::Config;
use crate::db::Database;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn Database>,
    pub analyzer: Arc<dyn TextAnalyzer>,
    pub config: Arc<Config>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(
    config: Config,
    db: Arc<dyn Database>,
    analyzer: Arc<dyn TextAnalyzer>,
    port: u16,
    bind: &str,
) -> Result<()> {
    let state = AppState {
        db,
        analyzer,
        config: Arc::new(config),
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Gleaner API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the full router. Public so tests can drive it without a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(handlers::analyze::analyze))
        .route("/search", get(handlers::search::search))
        .route("/analyses", get(handlers::analyses::list_analyses))
        .route("/analyses/{id}", get(handlers::analyses::get_analysis))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
