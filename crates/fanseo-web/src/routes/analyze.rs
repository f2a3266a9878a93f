//! Analysis route handler.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use fanseo_core::analysis::model::{AnalysisResponse, AnalyzePayload};

use super::ApiError;
use crate::state::AppState;

pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzePayload>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let request = payload.into_request()?;

    let response = state.analyzer.analyze(&request).await?;

    tracing::info!(
        team = %response.team_name,
        analyses = response.analyses.len(),
        real = response.summary.real_data_count,
        "Analysis complete"
    );

    Ok(Json(response))
}
