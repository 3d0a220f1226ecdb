//! Page signals route handler.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use seoaudit_core::{AnalysisRequest, PageSignals};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/page-signals - Title, meta description and headings of a page.
pub async fn page_signals(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<PageSignals>, ApiError> {
    let Json(req) = payload?;
    let signals = state.auditor.page_signals(&req).await?;
    Ok(Json(signals))
}
