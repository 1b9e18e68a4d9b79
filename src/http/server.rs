//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the rover endpoint and fallbacks
//! - Wire up middleware (tracing, request ID, timeout, body limit, metrics)
//! - Bind server to listener
//! - Graceful shutdown

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::http::response::json_error_bodies;
use crate::http::rover::{get_info, method_not_allowed, move_rover, route_not_found};
use crate::lifecycle::shutdown_signal;
use crate::observability::metrics;

/// HTTP server for the rover API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig) -> Router {
        Router::new()
            .route(
                &config.api.path,
                get(get_info).post(move_rover).fallback(method_not_allowed),
            )
            .fallback(route_not_found)
            .layer(middleware::from_fn(track_requests))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(middleware::map_response(json_error_bodies))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(set_request_id_layer())
    }

    /// A clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Run the server until Ctrl+C or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            api_path = %self.config.api.path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = metrics::method_label(request.method());
    let response = next.run(request).await;
    metrics::record_request(method, response.status().as_u16(), start);
    response
}
