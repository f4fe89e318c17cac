//! Student Roster - Binary Entry Point
//!
//! Serves the student store over HTTP until Ctrl+C.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use student_roster::api::{create_router, AppState};
use student_roster::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("student_roster=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let store = Arc::new(config.build_store());
    info!(
        records = store.len(),
        policy = ?config.validation,
        "Student store ready"
    );

    let app = create_router(Arc::new(AppState::new(store)));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("{} v{} listening on http://{}", student_roster::NAME, student_roster::VERSION, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
