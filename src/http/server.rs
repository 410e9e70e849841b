//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the three routes
//! - Wire up middleware (request ID, tracing)
//! - Serve on a bound listener with graceful shutdown

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handlers::{chain_handler, hello_handler, ping_handler};
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::lifecycle::signals;
use crate::peer::PeerClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub peer_client: PeerClient,
}

/// HTTP server for one service-chain process.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let service_path = config.service_path();
        let state = AppState {
            config: Arc::new(config),
            peer_client: PeerClient::new(),
        };

        let router = Self::build_router(&service_path, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(service_path: &str, state: AppState) -> Router {
        Router::new()
            .route(service_path, get(chain_handler))
            .route("/ping", get(ping_handler))
            .route("/hello/{name}", get(hello_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID)),
            )
    }

    /// Run the server until a termination signal or shutdown trigger.
    ///
    /// In-flight requests are drained before this returns.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signals::shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
