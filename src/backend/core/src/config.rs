//! Configuration management.
//!
//! ```toml
//! [redirects]
//! signin = "/signin"
//! dashboard = "/dashboard"
//! external_jobs = "/external/jobs"
//!
//! [policy]
//! use_defaults = true
//!
//! [[policy.entries]]
//! path = "/dashboard/interviews"
//! permissions = ["interviews:read", "interviews:manage"]
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```
//!
//! Environment variables prefixed `TALENTGATE__` override file values, for
//! example `TALENTGATE__REDIRECTS__SIGNIN=/login`.

use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::access::{AccessGuard, RedirectTargets};
use crate::error::Result;
use crate::rbac::{PolicyEntry, PolicyTable, RouteAuthorizer};
use crate::telemetry::LoggingConfig;

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Redirect landing pages
    #[serde(default)]
    pub redirects: RedirectTargets,

    /// Route policy table
    #[serde(default)]
    pub policy: PolicyConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Start from the built-in recruitment dashboard table
    #[serde(default = "default_use_defaults")]
    pub use_defaults: bool,

    /// Additional routes. A path already covered by the defaults is a
    /// duplicate and fails validation.
    #[serde(default)]
    pub entries: Vec<PolicyEntry>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            use_defaults: default_use_defaults(),
            entries: Vec::new(),
        }
    }
}

// Default value functions
fn default_use_defaults() -> bool { true }

const ENV_PREFIX: &str = "TALENTGATE";

impl Config {
    /// Load configuration from the environment.
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let cfg: Config = config.try_deserialize()?;
        Ok(cfg)
    }

    /// Load from a specific file path, with environment overrides.
    pub fn from_file(path: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let cfg: Config = config.try_deserialize()?;
        Ok(cfg)
    }

    /// Build and validate the policy table. Any invalid entry fails the whole load.
    pub fn policy_table(&self) -> Result<PolicyTable> {
        let mut entries = if self.policy.use_defaults {
            PolicyTable::recruitment_default_entries()
        } else {
            Vec::new()
        };
        entries.extend(self.policy.entries.iter().cloned());

        let table = PolicyTable::from_entries(entries)?;
        info!(
            routes = table.len(),
            defaults = self.policy.use_defaults,
            "Policy table loaded"
        );
        Ok(table)
    }

    /// Build the access guard described by this configuration.
    pub fn access_guard(&self) -> Result<AccessGuard> {
        let table = Arc::new(self.policy_table()?);
        Ok(AccessGuard::new(
            RouteAuthorizer::new(table),
            self.redirects.clone(),
        ))
    }
}
