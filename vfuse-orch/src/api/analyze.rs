//! Unified analysis endpoint

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::error::ApiResult;
use crate::types::{AnalysisRequest, AnalyzeOptions, UnifiedResponse};
use crate::AppState;

/// POST /analyze request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeBody {
    pub input: AnalysisRequest,
    #[serde(default)]
    pub options: AnalyzeOptions,
}

/// POST /analyze
///
/// Runs the full analysis pipeline for one piece of content. Malformed
/// payloads yield 400; collaborator failures never do, since they are
/// absorbed into the returned response.
pub async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeBody>,
) -> ApiResult<Json<UnifiedResponse>> {
    // Dropping the handler future (client disconnect) drops the token and
    // with it every in-flight collaborator call.
    let cancel = CancellationToken::new();
    let response = state
        .orchestrator
        .analyze(&body.input, &body.options, cancel)
        .await?;
    Ok(Json(response))
}

/// Build analysis routes
pub fn analyze_routes() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze))
}
