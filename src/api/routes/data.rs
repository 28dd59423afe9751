//! Data Routes
//!
//! - GET /api/v1/records - The loaded table as JSON
//! - GET /api/v1/charts - Both chart descriptions as JSON

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ChartsResponse, RecordsResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::chart;

/// GET /api/v1/records
pub async fn list_records(State(state): State<Arc<AppState>>) -> ApiResult<Json<RecordsResponse>> {
    let dataset = state.current_dataset().await?;

    Ok(Json(RecordsResponse {
        records: dataset.records().to_vec(),
        total: dataset.len(),
        electricity_growth_pct: dataset.electricity_growth_pct(),
        compute_growth_factor: dataset.compute_growth_factor(),
    }))
}

/// GET /api/v1/charts
pub async fn chart_specs(State(state): State<Arc<AppState>>) -> ApiResult<Json<ChartsResponse>> {
    let dataset = state.current_dataset().await?;

    Ok(Json(ChartsResponse {
        electricity: chart::electricity_chart(&dataset)?,
        compute: chart::compute_chart(&dataset)?,
    }))
}
