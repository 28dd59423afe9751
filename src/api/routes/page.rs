//! Page Routes
//!
//! - GET / - The composed page
//! - GET /charts/electricity.svg - Line chart alone
//! - GET /charts/compute.svg - Bar chart alone

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;

const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// GET /
///
/// Load, then table, chart 1, chart 2, static text.
pub async fn index(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    let dataset = state.current_dataset().await?;
    let html = state.page.compose(&dataset)?;

    tracing::debug!(records = dataset.len(), bytes = html.len(), "Rendered page");
    Ok(Html(html))
}

/// GET /charts/electricity.svg
pub async fn electricity_svg(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let dataset = state.current_dataset().await?;
    let svg = state.page.electricity_svg(&dataset)?;
    Ok(([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg))
}

/// GET /charts/compute.svg
pub async fn compute_svg(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let dataset = state.current_dataset().await?;
    let svg = state.page.compute_svg(&dataset)?;
    Ok(([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg))
}
