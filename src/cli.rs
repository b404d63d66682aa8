//! Command-line interface.
//!
//! Every flag can also be set through the environment variable shown in
//! `--help`. Flag values only fill in what the config file leaves unset.

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::Parser;

use crate::config::resolver::{Overrides, DEFAULT_PORT, DEFAULT_SESSION_MAX_AGE};

/// OAuth2 authentication gateway in front of an upstream web service.
#[derive(Parser, Debug, Clone)]
#[command(name = "connect")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// The config file (.toml or .json)
    #[arg(short, long, env = "CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Session key
    #[arg(long, env = "SESSION_KEY")]
    pub session_key: Option<String>,

    /// Session max age in milliseconds
    #[arg(long, env = "SESSION_MAX_AGE", default_value_t = DEFAULT_SESSION_MAX_AGE)]
    pub session_max_age: u64,

    /// Doreamon client ID
    #[arg(long, env = "CLIENT_ID")]
    pub client_id: Option<String>,

    /// Doreamon client secret
    #[arg(long, env = "CLIENT_SECRET")]
    pub client_secret: Option<String>,

    /// Doreamon redirect URI
    #[arg(long, env = "REDIRECT_URI")]
    pub redirect_uri: Option<String>,

    /// Frontend service, host:port or protocol://host:port
    #[arg(long, env = "FRONTEND")]
    pub frontend: Option<String>,

    /// Backend service, host:port or protocol://host:port
    #[arg(long, env = "BACKEND")]
    pub backend: Option<String>,

    /// Upstream service, host:port or protocol://host:port
    #[arg(long, env = "UPSTREAM")]
    pub upstream: Option<String>,

    /// Print the resolved config before starting
    #[arg(long, env = "DEBUG", value_parser = FalseyValueParser::new())]
    pub debug: bool,
}

impl From<&Cli> for Overrides {
    fn from(cli: &Cli) -> Self {
        Self {
            port: cli.port,
            session_key: cli.session_key.clone(),
            session_max_age: cli.session_max_age,
            client_id: cli.client_id.clone(),
            client_secret: cli.client_secret.clone(),
            redirect_uri: cli.redirect_uri.clone(),
            frontend: cli.frontend.clone(),
            backend: cli.backend.clone(),
            upstream: cli.upstream.clone(),
        }
    }
}
