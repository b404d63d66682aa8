//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the config file named by `--config`, if any
//! - Resolve it against flag/env values
//! - Dump the merged config when `--debug` is set, before the client check
//! - Hand the config to the runtime
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Single pass: exactly one config is resolved per process

use std::io::Write;

use thiserror::Error;

use crate::cli::Cli;
use crate::config::{load_config, Config, ConfigError, Overrides, Resolver};
use crate::gateway::{Runtime, RuntimeError};

/// Error type for process startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to start server: {0}")]
    Runtime(#[from] RuntimeError),
}

/// Load and resolve the configuration described by the command line.
///
/// With `--debug` the merged configuration is written to `out` before the
/// final client check, so a rejected config can still be inspected.
pub fn resolve_config<W: Write>(
    cli: &Cli,
    resolver: &Resolver,
    out: &mut W,
) -> Result<Config, ConfigError> {
    let file = load_config(cli.config.as_deref())?;
    let config = resolver.merge(file, &Overrides::from(cli))?;

    if cli.debug {
        let written = render_config(&config)
            .map_err(std::io::Error::from)
            .and_then(|dump| writeln!(out, "{dump}"));
        if let Err(e) = written {
            tracing::warn!(error = %e, "Failed to write config dump");
        }
    }

    Resolver::validate(&config)?;

    tracing::info!(
        port = config.port,
        provider = %config.auth.provider,
        clients = config.oauth2.len(),
        topology = config.topology.mode(),
        "Configuration resolved"
    );
    Ok(config)
}

/// Render the resolved configuration for the `--debug` dump.
pub fn render_config(config: &Config) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(config).map(|json| format!("config: {json}"))
}

/// Resolve the configuration and run `runtime` with it, dumping to stdout.
pub async fn run<R: Runtime>(cli: &Cli, resolver: &Resolver, runtime: &R) -> Result<(), StartupError> {
    run_with_output(cli, resolver, runtime, &mut std::io::stdout()).await
}

/// Like [`run`], writing the `--debug` dump to `out`.
pub async fn run_with_output<R: Runtime, W: Write + Send>(
    cli: &Cli,
    resolver: &Resolver,
    runtime: &R,
    out: &mut W,
) -> Result<(), StartupError> {
    let config = resolve_config(cli, resolver, out)?;
    runtime.start(config).await?;
    Ok(())
}
