//! Connect gateway
//!
//! Resolves the runtime configuration of an OAuth2 authentication gateway and
//! hands it to the HTTP runtime.
//!
//! # Architecture Overview
//!
//! ```text
//!   config file ──▶ ┌────────┐
//!                   │ loader │──┐
//!                   └────────┘  │   ┌──────────┐    ┌─────────┐
//!   flags / env ───────────────┼──▶│ resolver │───▶│ gateway │
//!                               │   └──────────┘    │ runtime │
//!   identity provider table ────┘                   └─────────┘
//! ```

// Core subsystems
pub mod cli;
pub mod config;
pub mod gateway;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::{Config, Resolver};
pub use gateway::{HttpGateway, Runtime};
