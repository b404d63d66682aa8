//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!
//! Consumers:
//!     → logging.rs (fmt layer on stderr, filtered by RUST_LOG)
//! ```

pub mod logging;

pub use logging::init_logging;
