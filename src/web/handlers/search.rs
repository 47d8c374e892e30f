// GET /search?topic=: stored analyses whose topics or keywords contain the
// term (case-insensitive substring), newest first. Missing `topic` is a 400.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::db::models::AnalysisPayload;
use crate::web::{api_error, AppState};

#[derive(Deserialize)]
pub struct SearchQuery {
    /// Topic or keyword to search for
    pub topic: String,
}

pub async fn search(State(state): State<AppState>, Query(params): Query<SearchQuery>) -> Response {
    match state.db.search_analyses(&params.topic).await {
        Ok(rows) => {
            let results: Vec<AnalysisPayload> = rows.iter().map(|a| a.to_payload()).collect();
            Json(serde_json::json!({ "results": results })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, topic = %params.topic, "DB error during search");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}
