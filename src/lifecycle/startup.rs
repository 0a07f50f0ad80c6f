//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the route table and router from validated configuration
//! - Start the metrics exporter when enabled
//! - Bind the listener and hand over to the HTTP server

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::http::{HttpServer, ServerError};
use crate::lifecycle::Shutdown;
use crate::observability::metrics;
use crate::routing::Router;

/// Run the guide server until shutdown.
///
/// `config` must already be validated.
pub async fn serve(config: AppConfig, shutdown: &Shutdown) -> Result<(), ServerError> {
    let router = Arc::new(Router::from_config(&config.router));

    for route in router.table() {
        tracing::info!(path = %route.path, view = %route.view, "Route registered");
    }

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.server.bind_address)
        .await
        .map_err(|source| ServerError::Bind {
            address: config.server.bind_address.clone(),
            source,
        })?;

    tracing::info!(
        address = %listener.local_addr()?,
        history = ?router.history().kind(),
        base = router.history().base(),
        "Listening for connections"
    );

    let server = HttpServer::new(config, router);
    server.run(listener, shutdown.subscribe()).await
}
