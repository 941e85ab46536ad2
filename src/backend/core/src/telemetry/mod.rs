//! Telemetry: structured logging and decision metrics.
//!
//! - **Logging**: JSON/pretty logging through `tracing-subscriber`, with email masking
//! - **Metrics**: counters for access decisions and tenancy outcomes via the `metrics` facade
//!
//! # Example
//!
//! ```rust,no_run
//! use talentgate_core::telemetry::{init_logging, LoggingConfig};
//!
//! init_logging(&LoggingConfig::default()).expect("Failed to initialize logging");
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{init_logging, mask_email, LogFormat, LoggingConfig};
