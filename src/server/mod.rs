pub mod handlers;
mod types;

pub use types::{AskRequest, AskResponse, DomainInfo, ErrorResponse, HealthResponse};

use crate::{Result, assistant::Assistant, config::Config};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(assistant: Arc<Assistant>) -> Router {
    let app_state = handlers::AppState { assistant };

    Router::new()
        .route("/ask", post(handlers::ask))
        .route("/domains", get(handlers::domains))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let assistant = Assistant::new(&config)?;
    let app = router(Arc::new(assistant));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
