//! Gateway runtime handoff.
//!
//! # Data Flow
//! ```text
//! resolved Config
//!     → Runtime::start (consumes the config)
//!     → server.rs (bind, serve until Ctrl-C)
//! ```
//!
//! The OAuth2 flow and request proxying live behind this seam; the
//! configuration layer only depends on the [`Runtime`] trait.

pub mod server;

use std::future::Future;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::Config;

pub use server::HttpGateway;

/// Failure reported by a gateway runtime.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(std::io::Error),
}

/// A server that runs with a fully resolved configuration.
pub trait Runtime {
    /// Start serving. Returns once the server stops.
    fn start(&self, config: Config) -> impl Future<Output = Result<(), RuntimeError>> + Send;
}
