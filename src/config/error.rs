//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for configuration file loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing or unreadable.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the schema.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The file is not valid JSON or does not match the schema.
    #[error("failed to parse config file {path}: {source}")]
    ParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The file extension names a format the loader does not read.
    #[error("unsupported config format: {path}")]
    UnsupportedFormat { path: PathBuf },
}

/// A malformed endpoint string.
///
/// `field` names the flag the string came from (`upstream`, `frontend`, `backend`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("{field} format error, protocol://host:port")]
    Url { field: &'static str },

    #[error("{field} format error, host:port")]
    HostPort { field: &'static str },
}

/// A required field combination is missing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `client_id` was given without its secret or redirect URI.
    #[error("client_id, client_secret, redirect_uri are required (1)")]
    IncompleteClient,

    /// Neither an upstream nor a frontend/backend pair was given.
    #[error("frontend and backend are required")]
    MissingTopology,

    /// No OAuth2 client registration survived resolution.
    #[error("client_id, client_secret, redirect_uri are required (2)")]
    NoClients,
}

/// Any failure while producing a resolved [`Config`](super::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
