//! Configuration resolution.
//!
//! # Responsibilities
//! - Force-set the identity provider's auth mode and service table
//! - Overlay flag/env values where the file left a field unset
//! - Pick the deployment topology and parse its endpoint strings
//! - Fall back to a generated secret key
//! - Refuse to produce a config without an OAuth2 client
//!
//! # Precedence
//! ```text
//! port, secret_key, session_max_age:  file (if set, non-zero) > flag/env
//! oauth2:                             client-id flags replace the file list
//! topology:                           file upstream > --upstream > --frontend + --backend
//! ```

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::config::endpoint::parse_endpoint;
use crate::config::error::{ConfigError, ValidationError};
use crate::config::provider::IdentityProvider;
use crate::config::schema::{Config, FileConfig, FileEndpoint, OAuth2Client, Topology};

/// Default `--port`.
pub const DEFAULT_PORT: u16 = 8080;

/// Default `--session-max-age`, one day in milliseconds.
pub const DEFAULT_SESSION_MAX_AGE: u64 = 86_400_000;

/// Length of a generated secret key.
pub const SECRET_LENGTH: usize = 10;

/// Values supplied through command-line flags or environment variables.
///
/// Empty strings count as not supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub port: u16,
    pub session_key: Option<String>,
    pub session_max_age: u64,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
    pub frontend: Option<String>,
    pub backend: Option<String>,
    pub upstream: Option<String>,
}

impl Default for Overrides {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            session_key: None,
            session_max_age: DEFAULT_SESSION_MAX_AGE,
            client_id: None,
            client_secret: None,
            redirect_uri: None,
            frontend: None,
            backend: None,
            upstream: None,
        }
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Random alphanumeric secret of [`SECRET_LENGTH`] characters.
pub fn generate_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SECRET_LENGTH)
        .map(char::from)
        .collect()
}

/// Merges a loaded [`FileConfig`] with [`Overrides`] into a runnable [`Config`].
#[derive(Debug, Clone)]
pub struct Resolver {
    provider: IdentityProvider,
    secret: fn() -> String,
}

impl Resolver {
    /// Create a resolver for the given identity provider.
    pub fn new(provider: IdentityProvider) -> Self {
        Self {
            provider,
            secret: generate_secret,
        }
    }

    /// Replace the fallback secret generator.
    pub fn with_secret_generator(mut self, secret: fn() -> String) -> Self {
        self.secret = secret;
        self
    }

    /// Resolve the final configuration. Fails on the first invalid input.
    pub fn resolve(&self, file: FileConfig, overrides: &Overrides) -> Result<Config, ConfigError> {
        let config = self.merge(file, overrides)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Apply overlays and pick the topology, without the final client check.
    pub fn merge(&self, file: FileConfig, overrides: &Overrides) -> Result<Config, ConfigError> {
        let port = match file.port.filter(|p| *p != 0) {
            Some(port) => port,
            None => overrides.port,
        };

        let session_max_age = match file.session_max_age.filter(|age| *age != 0) {
            Some(age) => age,
            None => overrides.session_max_age,
        };

        let secret_key = file
            .secret_key
            .filter(|key| !key.is_empty())
            .or_else(|| supplied(&overrides.session_key).map(str::to_string));

        let oauth2 = match self.client_from(overrides)? {
            Some(client) => {
                tracing::debug!(client_id = %client.client_id, "OAuth2 client taken from flags");
                vec![client]
            }
            None => file.oauth2.unwrap_or_default(),
        };

        let topology = Self::topology(file.upstream.as_ref(), overrides)?;

        let secret_key = match secret_key {
            Some(key) => key,
            None => {
                tracing::debug!("No secret key configured, generating one");
                (self.secret)()
            }
        };

        Ok(Config {
            port,
            secret_key,
            session_max_age,
            auth: self.provider.auth(),
            services: self.provider.services(),
            oauth2,
            topology,
        })
    }

    /// Gate a merged configuration before it is handed to the runtime.
    pub fn validate(config: &Config) -> Result<(), ValidationError> {
        if config.oauth2.is_empty() {
            return Err(ValidationError::NoClients);
        }
        Ok(())
    }

    /// Build the single client registration described by the client flags.
    fn client_from(&self, overrides: &Overrides) -> Result<Option<OAuth2Client>, ValidationError> {
        let Some(client_id) = supplied(&overrides.client_id) else {
            return Ok(None);
        };

        match (
            supplied(&overrides.client_secret),
            supplied(&overrides.redirect_uri),
        ) {
            (Some(client_secret), Some(redirect_uri)) => Ok(Some(OAuth2Client {
                name: self.provider.name.to_string(),
                client_id: client_id.to_string(),
                client_secret: client_secret.to_string(),
                redirect_uri: redirect_uri.to_string(),
            })),
            _ => Err(ValidationError::IncompleteClient),
        }
    }

    fn topology(
        file_upstream: Option<&FileEndpoint>,
        overrides: &Overrides,
    ) -> Result<Topology, ConfigError> {
        if let Some(upstream) = file_upstream.and_then(FileEndpoint::complete) {
            tracing::debug!(host = %upstream.host, port = upstream.port, "Using upstream from config file");
            return Ok(Topology::Upstream(upstream));
        }

        if let Some(raw) = supplied(&overrides.upstream) {
            let upstream = parse_endpoint("upstream", raw)?;
            tracing::debug!(host = %upstream.host, port = upstream.port, "Using upstream from flags");
            return Ok(Topology::Upstream(upstream));
        }

        match (supplied(&overrides.frontend), supplied(&overrides.backend)) {
            (Some(frontend), Some(backend)) => {
                let frontend = parse_endpoint("frontend", frontend)?;
                let backend = parse_endpoint("backend", backend)?;
                tracing::debug!(
                    frontend = %frontend.host,
                    backend = %backend.host,
                    "Using split frontend/backend"
                );
                Ok(Topology::FrontendBackend { frontend, backend })
            }
            _ => Err(ValidationError::MissingTopology.into()),
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(IdentityProvider::default())
    }
}
