//! Error handling for Talentgate Core.
//!
//! Authorization denials are never errors: they are [`Decision`] values.
//! Errors cover the two things that can actually go wrong:
//!
//! - **Configuration errors**: an invalid policy table. These are fatal at
//!   load time and never degrade into a silent allow or deny later.
//! - **Membership fetch errors**: the company directory could not answer.
//!   These are transient and must never be reported as "no access".
//!
//! [`Decision`]: crate::access::Decision

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// Result Type Alias
// ═══════════════════════════════════════════════════════════════════════════════

/// A specialized Result type for Talentgate operations.
pub type Result<T> = std::result::Result<T, AccessError>;

// ═══════════════════════════════════════════════════════════════════════════════
// Error Codes
// ═══════════════════════════════════════════════════════════════════════════════

/// Machine-readable error codes.
///
/// These codes are stable and can be used by callers for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Configuration Errors (5000-5099)
    EmptyPermissionSet,
    DuplicateRoute,
    InvalidRoute,
    InvalidConfiguration,
    PolicyParseFailed,

    // External Service Errors (3000-3099)
    MembershipFetchFailed,
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub const fn numeric_code(&self) -> u32 {
        match self {
            Self::MembershipFetchFailed => 3000,

            Self::EmptyPermissionSet => 5000,
            Self::DuplicateRoute => 5001,
            Self::InvalidRoute => 5002,
            Self::InvalidConfiguration => 5003,
            Self::PolicyParseFailed => 5004,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// AccessError
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("Policy entry for route {route} has an empty permission set")]
    EmptyPermissionSet { route: String },

    #[error("Route {route} appears more than once in the policy table")]
    DuplicateRoute { route: String },

    #[error("Policy route {route:?} must be an absolute path starting with '/'")]
    InvalidRoute { route: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to parse policy table: {0}")]
    PolicyParse(#[from] toml::de::Error),

    #[error("Membership lookup failed for principal {principal}: {reason}")]
    MembershipFetch { principal: String, reason: String },
}

impl AccessError {
    pub fn membership_fetch(principal: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MembershipFetch {
            principal: principal.into(),
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyPermissionSet { .. } => ErrorCode::EmptyPermissionSet,
            Self::DuplicateRoute { .. } => ErrorCode::DuplicateRoute,
            Self::InvalidRoute { .. } => ErrorCode::InvalidRoute,
            Self::Config(_) => ErrorCode::InvalidConfiguration,
            Self::PolicyParse(_) => ErrorCode::PolicyParseFailed,
            Self::MembershipFetch { .. } => ErrorCode::MembershipFetchFailed,
        }
    }

    /// Developer-facing errors that must stop startup.
    pub fn is_configuration(&self) -> bool {
        !self.is_transient()
    }

    /// Errors a caller may retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::MembershipFetch { .. })
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
