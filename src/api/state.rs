//! Shared application state for HTTP handlers

use std::sync::Arc;

use crate::store::StudentStore;

/// State handed to every handler through `Router::with_state`
pub struct AppState {
    /// The record store; built once at startup
    pub store: Arc<StudentStore>,
}

impl AppState {
    pub fn new(store: Arc<StudentStore>) -> Self {
        Self { store }
    }
}
