//! Route authorizer: "can this principal reach this path?"
//!
//! 1. Super-admins bypass the policy table entirely.
//! 2. Paths absent from the table are allowed (default allow).
//! 3. Otherwise the principal needs any one of the listed permissions.

use std::sync::Arc;

use super::models::{Permission, Principal};
use super::policy::PolicyTable;

/// Which rule of the authorizer produced the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessReason {
    SuperAdmin,
    /// The path has no policy entry.
    Unlisted,
    /// The principal holds this one of the required permissions.
    Granted(Permission),
    /// The principal holds none of the required permissions.
    Missing,
}

impl AccessReason {
    pub fn is_allowed(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Unlisted => "unlisted",
            Self::Granted(_) => "granted",
            Self::Missing => "missing",
        }
    }
}

/// Evaluates principals against a shared, immutable [`PolicyTable`].
#[derive(Debug, Clone)]
pub struct RouteAuthorizer {
    policy: Arc<PolicyTable>,
}

impl RouteAuthorizer {
    pub fn new(policy: Arc<PolicyTable>) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PolicyTable {
        &self.policy
    }

    pub fn can_access(&self, principal: &Principal, path: &str) -> bool {
        self.explain(principal, path).is_allowed()
    }

    /// Like [`can_access`](Self::can_access), but reports which rule decided.
    pub fn explain(&self, principal: &Principal, path: &str) -> AccessReason {
        if principal.is_super_admin() {
            return AccessReason::SuperAdmin;
        }

        let Some(required) = self.policy.required_permissions(path) else {
            return AccessReason::Unlisted;
        };

        let index = principal.permission_index();
        required
            .iter()
            .find(|p| index.contains(p))
            .map(|p| AccessReason::Granted(p.clone()))
            .unwrap_or(AccessReason::Missing)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
