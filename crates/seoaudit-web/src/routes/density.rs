//! Keyword density route handler.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use seoaudit_core::{AnalysisRequest, AnalysisResult};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/keyword-density - Rank the keywords of a page.
pub async fn keyword_density(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(req) = payload?;
    let result = state.auditor.keyword_density(&req).await?;

    info!(
        url = req.url.as_deref().unwrap_or_default(),
        total_words = result.total_words,
        keywords = result.keyword_density.len(),
        "Keyword density analyzed"
    );

    Ok(Json(result))
}
