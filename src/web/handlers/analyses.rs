// Stored analysis handlers.
//
// GET /analyses       - most recent first, optional ?limit= (default 50, max 500)
// GET /analyses/{id}  - single analysis, 404 if missing

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::db::models::AnalysisPayload;
use crate::web::{api_error, AppState};

#[derive(Deserialize, Default)]
pub struct ListQuery {
    pub limit: Option<u32>,
}

pub async fn list_analyses(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(50).min(500);
    let rows = state.db.recent_analyses(limit).await.unwrap_or_default();
    let total = state.db.analysis_count().await.unwrap_or(0);
    let results: Vec<AnalysisPayload> = rows.iter().map(|a| a.to_payload()).collect();

    Json(serde_json::json!({
        "results": results,
        "total": total,
    }))
}

pub async fn get_analysis(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.db.get_analysis(id).await {
        Ok(Some(analysis)) => Json(analysis.to_payload()).into_response(),
        Ok(None) => api_error(StatusCode::NOT_FOUND, "Analysis not found"),
        Err(e) => {
            tracing::error!(error = %e, id, "DB error fetching analysis");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}
