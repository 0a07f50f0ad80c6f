//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router serving the guide's pages
//! - Wire up middleware (request ID, tracing, timeout, security headers)
//! - Resolve each request path through the route table
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{AppConfig, ServerConfig};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::http::response;
use crate::lifecycle::{signals, ShutdownSignal};
use crate::observability::metrics;
use crate::pages::{self, PageContext};
use crate::routing::Router as GuideRouter;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<GuideRouter>,
    pub site: Arc<ServerConfig>,
}

/// HTTP server for the guide's pages.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
    guide_router: Arc<GuideRouter>,
}

impl HttpServer {
    /// Create a new HTTP server around an already constructed router.
    pub fn new(config: AppConfig, guide_router: Arc<GuideRouter>) -> Self {
        let state = AppState {
            router: guide_router.clone(),
            site: Arc::new(config.server.clone()),
        };

        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            guide_router,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let mut router = Router::new();
        if config.server.health_endpoint {
            router = router.route("/healthz", get(health_handler));
        }

        router
            .route("/", get(page_handler))
            .route("/{*path}", get(page_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(response::nosniff_layer())
            .layer(response::frame_options_layer())
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = request.request_id().unwrap_or("unknown"),
                )
            }))
            .layer(set_request_id_layer())
    }

    /// The fully layered Axum router, for driving the server in-process.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Run the server until Ctrl+C, SIGTERM or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.guide_router.table().len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = signals::termination() => {}
                    _ = shutdown.triggered() => {
                        tracing::info!("Shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Serve the page a request path resolves to.
async fn page_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let start_time = Instant::now();
    let href = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    let ctx = PageContext {
        router: &state.router,
        site_title: &state.site.site_title,
        script_src: state.site.script_src.as_deref(),
    };

    let view = state
        .router
        .resolve_href(href)
        .ok()
        .and_then(|resolution| resolution.view());

    let response = match view {
        Some(view) => {
            tracing::debug!(path = %uri.path(), view = %view, "Route matched");
            metrics::record_page_view(view);
            response::page(StatusCode::OK, pages::render(&ctx, Some(view)))
        }
        None => {
            tracing::debug!(path = %uri.path(), "No route matched");
            metrics::record_route_miss();
            response::page(StatusCode::NOT_FOUND, pages::render(&ctx, None))
        }
    };

    metrics::record_request(response.status().as_u16(), start_time);
    response
}

async fn health_handler() -> impl IntoResponse {
    "ok"
}
