//! Statistics endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use super::ApiError;
use crate::api::state::AppState;
use crate::store::DEFAULT_BINS;
use crate::types::{Distribution, DistributionField, Statistics, StudentRecord};

/// Query parameters for the top students endpoint
#[derive(Debug, Deserialize)]
pub struct TopParams {
    /// Number of students to return
    #[serde(default = "default_top")]
    pub n: usize,
}

fn default_top() -> usize {
    3
}

/// Query parameters for the distribution endpoint
#[derive(Debug, Deserialize)]
pub struct DistributionParams {
    #[serde(default)]
    pub field: DistributionField,
    #[serde(default = "default_bins")]
    pub bins: usize,
}

fn default_bins() -> usize {
    DEFAULT_BINS
}

/// GET /statistics/ - Count and averages
pub async fn get_statistics(State(state): State<Arc<AppState>>) -> Json<Statistics> {
    Json(state.store.statistics())
}

/// GET /statistics/top?n= - Highest grades first
pub async fn get_top_students(
    State(state): State<Arc<AppState>>,
    params: Result<Query<TopParams>, QueryRejection>,
) -> Result<Json<Vec<StudentRecord>>, ApiError> {
    let Query(params) = params?;
    Ok(Json(state.store.top_by_grade(params.n)))
}

/// GET /statistics/distribution?field=&bins= - Histogram over grade or age
pub async fn get_distribution(
    State(state): State<Arc<AppState>>,
    params: Result<Query<DistributionParams>, QueryRejection>,
) -> Result<Json<Distribution>, ApiError> {
    let Query(params) = params?;
    let distribution = state.store.distribution(params.field, params.bins)?;
    Ok(Json(distribution))
}
