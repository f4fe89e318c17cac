//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::rest::{statistics, students};
use super::state::AppState;

/// Greeting served at `/`
pub const WELCOME_MESSAGE: &str = "Welcome to Student Management System API";

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // The UI is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        // Students
        .route(
            "/students/",
            get(students::list_students).post(students::add_student),
        )
        .route(
            "/students",
            get(students::list_students).post(students::add_student),
        )
        .route("/students/search", get(students::search_students))
        .route("/students/:id", get(students::get_student))
        // Statistics
        .route("/statistics/", get(statistics::get_statistics))
        .route("/statistics", get(statistics::get_statistics))
        .route("/statistics/top", get(statistics::get_top_students))
        .route("/statistics/distribution", get(statistics::get_distribution))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Welcome message endpoint
async fn root() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StudentStore;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn app() -> Router {
        let store = Arc::new(StudentStore::with_seed_data());
        create_router(Arc::new(AppState::new(store)))
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_root_welcome() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], WELCOME_MESSAGE);
    }
}
