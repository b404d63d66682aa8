//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Parse flags → Load config file → Merge → [debug dump] → Validate → Runtime::start
//!
//! Shutdown (shutdown.rs):
//!     SIGINT → Stop accepting → Drain connections → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any load, parse or validation error is fatal
//! - The runtime never sees a partially resolved config

pub mod shutdown;
pub mod startup;

pub use shutdown::shutdown_signal;
pub use startup::{render_config, resolve_config, run, run_with_output, StartupError};
