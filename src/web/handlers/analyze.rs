// POST /analyze: analyze and store one or more texts.
//
// Body: { "text": "..." } or { "texts": ["...", "..."] }
// 200: { "results": [AnalysisPayload, ...] }
// 400: no usable text, 502: analyzer failed, 500: storage failed

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::pipeline::{analyze_texts, AnalyzeRequest, PipelineError};
use crate::web::{api_error, AppState};

pub async fn analyze(State(state): State<AppState>, Json(req): Json<AnalyzeRequest>) -> Response {
    let texts = match req.texts() {
        Ok(texts) => texts,
        Err(e) => return pipeline_error(e),
    };

    match analyze_texts(
        state.analyzer.as_ref(),
        state.db.as_ref(),
        &texts,
        state.config.top_k,
    )
    .await
    {
        Ok(results) => Json(serde_json::json!({ "results": results })).into_response(),
        Err(e) => pipeline_error(e),
    }
}

fn pipeline_error(e: PipelineError) -> Response {
    let status = match e {
        PipelineError::EmptyInput => StatusCode::BAD_REQUEST,
        PipelineError::Analyzer(_) => StatusCode::BAD_GATEWAY,
        PipelineError::Storage(ref err) => {
            tracing::error!(error = %err, "DB error storing analysis");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    api_error(status, &e.to_string())
}
