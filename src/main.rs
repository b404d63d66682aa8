//! `connect`: OAuth2 authentication gateway.
//!
//! Startup order:
//! 1. Parse flags and environment variables
//! 2. Initialise logging
//! 3. Load the config file and resolve it against the flags
//! 4. Start the gateway runtime
//!
//! Any failure is logged and the process exits with a non-zero status.

use std::process::ExitCode;

use clap::Parser;

use connect_gateway::cli::Cli;
use connect_gateway::config::{Resolver, DOREAMON};
use connect_gateway::gateway::HttpGateway;
use connect_gateway::lifecycle;
use connect_gateway::observability::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    tracing::info!("connect v{} starting", env!("CARGO_PKG_VERSION"));

    let resolver = Resolver::new(DOREAMON);
    match lifecycle::run(&cli, &resolver, &HttpGateway::new()).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "connect failed");
            ExitCode::FAILURE
        }
    }
}
