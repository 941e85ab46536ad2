//! Role classification and predefined roles.
//!
//! Role names are free-form strings supplied by the identity provider. Only
//! two names carry special meaning, and they are recognized in exactly one
//! place ([`RoleClass::classify`]) after a single normalization step:
//!
//! | Class      | Recognized name | Effect                                        |
//! |------------|-----------------|-----------------------------------------------|
//! | SuperAdmin | `super-admin`   | Bypasses the policy table; always sees picker |
//! | Admin      | `admin`         | Reported by `Principal::is_admin`             |
//! | Standard   | anything else   | No special treatment                          |
//!
//! Talentgate also ships a set of predefined roles whose permission sets
//! line up with [`PolicyTable::recruitment_defaults`](super::PolicyTable::recruitment_defaults).

use serde::{Deserialize, Serialize};

use super::models::{Permission, Role};

/// Closed set of role classes the authorization logic distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleClass {
    SuperAdmin,
    Admin,
    Standard,
}

impl RoleClass {
    /// Canonical form of a role name: surrounding whitespace trimmed, ASCII lowercased.
    pub fn normalize(name: &str) -> String {
        name.trim().to_ascii_lowercase()
    }

    /// Classify a role name. Unknown names are `Standard`, never an error.
    pub fn classify(name: &str) -> Self {
        match Self::normalize(name).as_str() {
            "super-admin" => Self::SuperAdmin,
            "admin" => Self::Admin,
            _ => Self::Standard,
        }
    }
}

/// Predefined role templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredefinedRole {
    SuperAdmin,
    Admin,
    InternalRecruiter,
    HiringManager,
    ExternalRecruiter,
}

impl PredefinedRole {
    /// Get the role name as issued by the identity provider.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super-admin",
            Self::Admin => "admin",
            Self::InternalRecruiter => "internal-recruiter",
            Self::HiringManager => "hiring-manager",
            Self::ExternalRecruiter => "external-recruiter",
        }
    }

    /// Get the description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "Manages every company on the platform",
            Self::Admin => "Administers users, roles and settings of one company",
            Self::InternalRecruiter => "Runs job postings and the candidate pipeline",
            Self::HiringManager => "Reviews candidates for their own openings",
            Self::ExternalRecruiter => "Agency recruiter limited to assigned job postings",
        }
    }

    /// Return the permission names granted by this predefined role.
    pub fn permissions(&self) -> Vec<Permission> {
        let names: &[&str] = match self {
            // Super-admins bypass the policy table; the list only matters
            // for screens that query permissions directly.
            Self::SuperAdmin => &["admin:access", "admin:companies"],
            Self::Admin => &[
                "dashboard:access",
                "admin:access",
                "admin:users",
                "admin:roles",
                "settings:manage",
                "jobs:manage",
                "candidates:read",
                "reports:read",
            ],
            Self::InternalRecruiter => &[
                "dashboard:access",
                "jobs:read",
                "jobs:manage",
                "candidates:read",
                "candidates:manage",
                "pipeline:manage",
            ],
            Self::HiringManager => &[
                "dashboard:access",
                "jobs:read",
                "candidates:read",
                "reports:read",
            ],
            Self::ExternalRecruiter => &["jobs:read", "candidates:submit"],
        };
        names.iter().map(|n| Permission::new(*n)).collect()
    }

    /// Build a full `Role` from this template.
    pub fn to_role(&self) -> Role {
        Role {
            name: self.name().to_string(),
            permissions: self.permissions(),
        }
    }

    /// Return all predefined roles.
    pub fn all() -> Vec<PredefinedRole> {
        vec![
            Self::SuperAdmin,
            Self::Admin,
            Self::InternalRecruiter,
            Self::HiringManager,
            Self::ExternalRecruiter,
        ]
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
