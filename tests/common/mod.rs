//! Shared utilities for integration testing.

use std::io::Write;
use std::net::SocketAddr;

use connect_gateway::config::{Config, Resolver};
use connect_gateway::config::resolver::Overrides;
use connect_gateway::gateway::HttpGateway;
use tempfile::NamedTempFile;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Write `content` to a temporary config file with the given extension.
#[allow(dead_code)]
pub fn config_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Overrides carrying a complete client registration and an upstream.
#[allow(dead_code)]
pub fn client_overrides() -> Overrides {
    Overrides {
        client_id: Some("id".into()),
        client_secret: Some("secret".into()),
        redirect_uri: Some("https://gw.local/login/callback".into()),
        upstream: Some("127.0.0.1:3000".into()),
        ..Overrides::default()
    }
}

/// A resolved config suitable for starting the gateway.
#[allow(dead_code)]
pub fn resolved_config() -> Config {
    Resolver::default()
        .resolve(Default::default(), &client_overrides())
        .unwrap()
}

/// Start the gateway on an ephemeral local port.
///
/// Dropping the returned sender stops the server.
#[allow(dead_code)]
pub async fn start_gateway(config: Config) -> (SocketAddr, oneshot::Sender<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let shutdown = async move {
            let _ = rx.await;
        };
        let _ = HttpGateway::new().serve(listener, &config, shutdown).await;
    });

    (addr, tx)
}
