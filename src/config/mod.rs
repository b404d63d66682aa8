//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML/JSON, optional)
//!     → loader.rs (read & deserialize into FileConfig)
//! flags / env vars
//!     → Overrides
//! FileConfig + Overrides + IdentityProvider
//!     → resolver.rs (precedence, endpoint.rs parsing, validation)
//!     → Config (validated, immutable)
//!     → handed to the gateway runtime
//! ```
//!
//! # Design Decisions
//! - File fields are `Option` so "unset" never collides with an explicit zero
//! - Provider auth and service URLs are constants injected into the resolver
//! - Topology is an enum, so upstream and frontend/backend cannot coexist
//! - Resolution fails on the first error; no partial config escapes

pub mod endpoint;
pub mod error;
pub mod loader;
pub mod provider;
pub mod resolver;
pub mod schema;

pub use endpoint::parse_endpoint;
pub use error::{ConfigError, FormatError, LoadError, ValidationError};
pub use loader::load_config;
pub use provider::{IdentityProvider, DOREAMON};
pub use resolver::{Overrides, Resolver};
pub use schema::{Config, Endpoint, FileConfig, FileEndpoint, OAuth2Client, Topology};
