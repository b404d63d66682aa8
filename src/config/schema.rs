//! Configuration schema definitions.
//!
//! Two shapes live here:
//! - [`FileConfig`]: what a config file may contain. Every field is optional so
//!   an absent key is distinguishable from an explicit zero.
//! - [`Config`]: the resolved, validated configuration handed to the runtime.

use serde::{Deserialize, Serialize};

/// Configuration as read from disk, before any overlay.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FileConfig {
    /// TCP port to bind.
    pub port: Option<u16>,

    /// Session/token signing key.
    pub secret_key: Option<String>,

    /// Session lifetime in milliseconds.
    pub session_max_age: Option<u64>,

    /// OAuth2 client registrations.
    pub oauth2: Option<Vec<OAuth2Client>>,

    /// Single upstream serving both UI and API.
    ///
    /// A split frontend/backend deployment is only configurable through flags,
    /// so `frontend`/`backend` keys are ignored like any other unknown key.
    pub upstream: Option<FileEndpoint>,
}

/// An endpoint table in a config file.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FileEndpoint {
    pub protocol: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl FileEndpoint {
    /// Returns the endpoint if both host and a non-zero port are set.
    pub fn complete(&self) -> Option<Endpoint> {
        let host = self.host.as_deref().filter(|h| !h.is_empty())?;
        let port = self.port.filter(|p| *p != 0)?;
        Some(Endpoint {
            protocol: self
                .protocol
                .clone()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_PROTOCOL.to_string()),
            host: host.to_string(),
            port,
        })
    }
}

/// Protocol assumed when an endpoint does not name one.
pub const DEFAULT_PROTOCOL: &str = "http";

/// A network service the gateway talks to.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Endpoint {
    pub protocol: String,
    pub host: String,
    pub port: u16,
}

/// An OAuth2 client registration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct OAuth2Client {
    /// Provider name this client is registered with.
    #[serde(default)]
    pub name: String,

    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

/// Authentication mode and provider.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthConfig {
    pub mode: String,
    pub provider: String,
}

/// A remote service backing one gateway feature.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub mode: String,
    pub service: String,
}

/// The identity provider's service endpoints.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServiceTable {
    pub app: ServiceDescriptor,
    pub user: ServiceDescriptor,
    pub menus: ServiceDescriptor,
    pub users: ServiceDescriptor,
    pub open_id: ServiceDescriptor,
}

/// Deployment topology. Exactly one is chosen during resolution.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Topology {
    /// One upstream serves everything.
    Upstream(Endpoint),

    /// Static frontend and API backend are separate services.
    FrontendBackend { frontend: Endpoint, backend: Endpoint },
}

impl Topology {
    /// The serialized `mode` tag.
    pub fn mode(&self) -> &'static str {
        match self {
            Topology::Upstream(_) => "upstream",
            Topology::FrontendBackend { .. } => "frontend_backend",
        }
    }
}

/// Fully resolved gateway configuration.
///
/// Immutable once produced by the resolver.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub secret_key: String,

    /// Session lifetime in milliseconds.
    pub session_max_age: u64,

    pub auth: AuthConfig,
    pub services: ServiceTable,

    /// Never empty once validated.
    pub oauth2: Vec<OAuth2Client>,

    pub topology: Topology,
}

impl Config {
    pub fn upstream(&self) -> Option<&Endpoint> {
        match &self.topology {
            Topology::Upstream(endpoint) => Some(endpoint),
            Topology::FrontendBackend { .. } => None,
        }
    }

    pub fn frontend(&self) -> Option<&Endpoint> {
        match &self.topology {
            Topology::FrontendBackend { frontend, .. } => Some(frontend),
            Topology::Upstream(_) => None,
        }
    }

    pub fn backend(&self) -> Option<&Endpoint> {
        match &self.topology {
            Topology::FrontendBackend { backend, .. } => Some(backend),
            Topology::Upstream(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_endpoint_requires_host_and_port() {
        let missing_port = FileEndpoint {
            protocol: None,
            host: Some("x".into()),
            port: None,
        };
        assert!(missing_port.complete().is_none());

        let zero_port = FileEndpoint {
            port: Some(0),
            ..missing_port.clone()
        };
        assert!(zero_port.complete().is_none());

        let empty_host = FileEndpoint {
            protocol: None,
            host: Some(String::new()),
            port: Some(9000),
        };
        assert!(empty_host.complete().is_none());
    }

    #[test]
    fn test_file_endpoint_defaults_protocol() {
        let endpoint = FileEndpoint {
            protocol: None,
            host: Some("x".into()),
            port: Some(9000),
        };
        assert_eq!(
            endpoint.complete(),
            Some(Endpoint {
                protocol: "http".into(),
                host: "x".into(),
                port: 9000,
            })
        );
    }

    #[test]
    fn test_topology_serializes_with_mode_tag() {
        let topology = Topology::Upstream(Endpoint {
            protocol: "https".into(),
            host: "api.local".into(),
            port: 443,
        });
        let json = serde_json::to_value(&topology).unwrap();
        assert_eq!(json["mode"], "upstream");
        assert_eq!(json["host"], "api.local");
        assert_eq!(json["port"], 443);
    }
}
