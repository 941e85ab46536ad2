//! Route policy table.
//!
//! Maps an exact route path to the permissions that satisfy it. A principal
//! needs *any one* of the listed permissions (OR semantics).
//!
//! # Default allow
//!
//! **A path that has no entry in the table requires no permission.** Only
//! listed routes are protected. This is the most security-relevant behavior
//! in the table: adding a new protected screen means adding an entry here,
//! otherwise every authenticated internal principal can reach it.
//!
//! Lookup is by exact string equality. `/dashboard/admin` being protected
//! says nothing about `/dashboard/admin/users`; prefix matching exists only
//! for navigation highlighting (see [`crate::navigation`]).

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::models::Permission;
use crate::error::{AccessError, Result};

// ═══════════════════════════════════════════════════════════════════════════════
// Policy Entry
// ═══════════════════════════════════════════════════════════════════════════════

/// One row of the policy table as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyEntry {
    pub path: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl PolicyEntry {
    pub fn new<I, P>(path: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        Self {
            path: path.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PolicyFile {
    #[serde(default)]
    policy: Vec<PolicyEntry>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Policy Table
// ═══════════════════════════════════════════════════════════════════════════════

/// Immutable route → permission-set mapping, validated at construction.
///
/// Every stored permission set is non-empty and every path is unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyTable {
    routes: HashMap<String, HashSet<Permission>>,
}

impl PolicyTable {
    /// A table with no entries: every route is allowed.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> PolicyTableBuilder {
        PolicyTableBuilder::default()
    }

    /// Build a table from entries, rejecting empty sets, duplicate paths and
    /// relative paths.
    pub fn from_entries(entries: impl IntoIterator<Item = PolicyEntry>) -> Result<Self> {
        let mut routes = HashMap::new();
        for entry in entries {
            Self::insert_validated(&mut routes, entry)?;
        }
        debug!(routes = routes.len(), "Policy table built");
        Ok(Self { routes })
    }

    /// Parse a TOML document of `[[policy]]` entries.
    ///
    /// ```toml
    /// [[policy]]
    /// path = "/dashboard/admin"
    /// permissions = ["admin:access"]
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: PolicyFile = toml::from_str(source)?;
        Self::from_entries(file.policy)
    }

    /// The entries shipped with the recruitment dashboard.
    pub fn recruitment_default_entries() -> Vec<PolicyEntry> {
        vec![
            PolicyEntry::new("/dashboard/admin", ["admin:access"]),
            PolicyEntry::new("/dashboard/admin/users", ["admin:users"]),
            PolicyEntry::new("/dashboard/admin/roles", ["admin:roles"]),
            PolicyEntry::new("/dashboard/admin/companies", ["admin:companies"]),
            PolicyEntry::new("/dashboard/jobs", ["jobs:read", "jobs:manage"]),
            PolicyEntry::new("/dashboard/jobs/new", ["jobs:manage"]),
            PolicyEntry::new("/dashboard/candidates", ["candidates:read", "candidates:manage"]),
            PolicyEntry::new("/dashboard/pipeline", ["pipeline:manage"]),
            PolicyEntry::new("/dashboard/reports", ["reports:read"]),
            PolicyEntry::new("/dashboard/settings", ["settings:manage"]),
        ]
    }

    /// The default recruitment dashboard table.
    pub fn recruitment_defaults() -> Self {
        let routes = Self::recruitment_default_entries()
            .into_iter()
            .map(|e| (e.path, e.permissions.into_iter().collect()))
            .collect();
        Self { routes }
    }

    /// Permissions that satisfy `path`, or `None` when the path is unlisted
    /// (and therefore allowed).
    pub fn required_permissions(&self, path: &str) -> Option<&HashSet<Permission>> {
        self.routes.get(path)
    }

    /// Whether `path` has an entry.
    pub fn is_protected(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn insert_validated(
        routes: &mut HashMap<String, HashSet<Permission>>,
        entry: PolicyEntry,
    ) -> Result<()> {
        if !entry.path.starts_with('/') {
            return Err(AccessError::InvalidRoute { route: entry.path });
        }
        if entry.permissions.is_empty() {
            return Err(AccessError::EmptyPermissionSet { route: entry.path });
        }
        if routes.contains_key(&entry.path) {
            return Err(AccessError::DuplicateRoute { route: entry.path });
        }
        routes.insert(entry.path, entry.permissions.into_iter().collect());
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Builder
// ═══════════════════════════════════════════════════════════════════════════════

/// Collects entries and validates them all at [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct PolicyTableBuilder {
    entries: Vec<PolicyEntry>,
}

impl PolicyTableBuilder {
    /// Add a route requiring any of `permissions`.
    pub fn route<I, P>(mut self, path: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        self.entries.push(PolicyEntry::new(path, permissions));
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = PolicyEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn build(self) -> Result<PolicyTable> {
        PolicyTable::from_entries(self.entries)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_exact_lookup() {
        let table = PolicyTable::builder()
            .route("/dashboard/admin", ["admin:access"])
            .build()
            .unwrap();

        let perms = table.required_permissions("/dashboard/admin").unwrap();
        assert!(perms.contains(&Permission::new("admin:access")));

        // No prefix semantics: child and sibling paths are unlisted.
        assert!(table.required_permissions("/dashboard/admin/users").is_none());
        assert!(table.required_permissions("/dashboard/admin/").is_none());
        assert!(table.required_permissions("/dashboard").is_none());
    }

    #[test]
    fn test_unlisted_route_is_unprotected() {
        let table = PolicyTable::recruitment_defaults();
        assert!(!table.is_protected("/dashboard"));
        assert!(!table.is_protected("/dashboard/some-new-screen"));
        assert!(table.is_protected("/dashboard/settings"));
    }

    #[test]
    fn test_empty_permission_set_rejected() {
        let err = PolicyTable::builder()
            .route("/dashboard/admin", Vec::<&str>::new())
            .build()
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::EmptyPermissionSet);
    }

    #[test]
    fn test_duplicate_route_rejected() {
        let err = PolicyTable::builder()
            .route("/dashboard/admin", ["admin:access"])
            .route("/dashboard/admin", ["admin:users"])
            .build()
            .unwrap_err();
        assert!(matches!(err, AccessError::DuplicateRoute { ref route } if route == "/dashboard/admin"));
    }

    #[test]
    fn test_relative_route_rejected() {
        let err = PolicyTable::from_entries([PolicyEntry::new("dashboard", ["a:b"])]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidRoute);
    }

    #[test]
    fn test_duplicate_permissions_collapse() {
        let table = PolicyTable::builder()
            .route("/dashboard/jobs", ["jobs:read", "jobs:read"])
            .build()
            .unwrap();
        assert_eq!(table.required_permissions("/dashboard/jobs").unwrap().len(), 1);
    }

    #[test]
    fn test_from_toml() {
        let source = r#"
            [[policy]]
            path = "/dashboard/admin"
            permissions = ["admin:access"]

            [[policy]]
            path = "/dashboard/jobs"
            permissions = ["jobs:read", "jobs:manage"]
        "#;
        let table = PolicyTable::from_toml_str(source).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.required_permissions("/dashboard/jobs").unwrap().len(), 2);
    }

    #[test]
    fn test_from_toml_missing_permissions_is_config_error() {
        let source = r#"
            [[policy]]
            path = "/dashboard/admin"
        "#;
        let err = PolicyTable::from_toml_str(source).unwrap_err();
        assert_eq!(err.code(), ErrorCode::EmptyPermissionSet);
    }

    #[test]
    fn test_from_toml_malformed() {
        let err = PolicyTable::from_toml_str("[[policy]\npath = ").unwrap_err();
        assert_eq!(err.code(), ErrorCode::PolicyParseFailed);
    }

    #[test]
    fn test_recruitment_defaults_are_valid() {
        let validated =
            PolicyTable::from_entries(PolicyTable::recruitment_default_entries()).unwrap();
        assert_eq!(validated, PolicyTable::recruitment_defaults());
        assert!(validated.paths().all(|p| p.starts_with("/dashboard/")));
    }

    #[test]
    fn test_empty_table() {
        let table = PolicyTable::empty();
        assert!(table.is_empty());
        assert!(table.required_permissions("/dashboard/admin").is_none());
    }
}
