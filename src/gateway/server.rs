//! HTTP runtime setup.
//!
//! # Responsibilities
//! - Bind the configured port
//! - Build the Axum router and wire up tracing middleware
//! - Serve until the shutdown future resolves

use std::future::Future;
use std::net::SocketAddr;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::gateway::{Runtime, RuntimeError};
use crate::lifecycle::shutdown::shutdown_signal;

/// State shared with handlers.
#[derive(Clone)]
struct GatewayState {
    provider: String,
    topology: &'static str,
}

/// Axum-based gateway runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpGateway;

impl HttpGateway {
    pub fn new() -> Self {
        Self
    }

    /// Build the router for a resolved configuration.
    pub fn router(config: &Config) -> Router {
        let state = GatewayState {
            provider: config.auth.provider.clone(),
            topology: config.topology.mode(),
        };

        Router::new()
            .route("/healthz", get(health_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(
        &self,
        listener: TcpListener,
        config: &Config,
        shutdown: F,
    ) -> Result<(), RuntimeError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr().map_err(RuntimeError::Serve)?;
        tracing::info!(address = %addr, "Gateway listening");

        axum::serve(listener, Self::router(config))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(RuntimeError::Serve)?;

        tracing::info!("Gateway stopped");
        Ok(())
    }
}

impl Runtime for HttpGateway {
    async fn start(&self, config: Config) -> Result<(), RuntimeError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| RuntimeError::Bind { addr, source })?;

        self.serve(listener, &config, shutdown_signal()).await
    }
}

async fn health_handler(State(state): State<GatewayState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "provider": state.provider,
        "topology": state.topology,
    }))
}
