//! Student endpoints

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use tracing::debug;

use super::ApiError;
use crate::api::state::AppState;
use crate::types::StudentRecord;

/// Query parameters for name search
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Substring to look for; missing means match everything
    #[serde(default)]
    pub name: String,
}

/// GET /students/ - All students in insertion order
pub async fn list_students(State(state): State<Arc<AppState>>) -> Json<Vec<StudentRecord>> {
    Json(state.store.list_all())
}

/// GET /students/:id - Single student by id
pub async fn get_student(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<StudentRecord>, ApiError> {
    let Path(id) = id.map_err(|rejection| ApiError::unprocessable(rejection.body_text()))?;
    let student = state.store.get_by_id(id)?;
    Ok(Json(student))
}

/// POST /students/ - Add a student, echoing the stored record
pub async fn add_student(
    State(state): State<Arc<AppState>>,
    body: Result<Json<StudentRecord>, JsonRejection>,
) -> Result<Json<StudentRecord>, ApiError> {
    let Json(record) = body.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Rejected student body");
        ApiError::new(rejection.status(), rejection.body_text())
    })?;
    let stored = state.store.add(record)?;
    Ok(Json(stored))
}

/// GET /students/search?name= - Case-insensitive name search
pub async fn search_students(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<StudentRecord>>, ApiError> {
    let Query(params) = params?;
    Ok(Json(state.store.search_by_name(&params.name)))
}
