//! Data Transfer Objects
//!
//! Response types for the JSON endpoints.

use serde::Serialize;

use crate::chart::ChartSpec;
use crate::data::YearlyRecord;

/// Records list response
#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    /// Rows in year order
    pub records: Vec<YearlyRecord>,
    /// Total count
    pub total: usize,
    /// Percent change in electricity across the span
    pub electricity_growth_pct: f64,
    /// Per-year compute growth factor
    pub compute_growth_factor: f64,
}

/// Both chart descriptions
#[derive(Debug, Serialize)]
pub struct ChartsResponse {
    pub electricity: ChartSpec,
    pub compute: ChartSpec,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, unhealthy
    pub status: String,
    /// Data source status: ok, error
    pub data: String,
    /// Number of records in the startup table
    pub records: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
