//! Permission index: the flattened permission set of a principal.
//!
//! The queries here are plain set membership. `has_any` and `has_all` both
//! return `false` for an empty query list, so a caller that forgets to list
//! requirements never ends up with an open route.

use std::collections::HashSet;

use super::models::{Permission, Principal, Role};

/// Deduplicated union of every permission across a role set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionIndex {
    permissions: HashSet<Permission>,
}

impl PermissionIndex {
    /// Build the index from a role list. Roles without permissions add nothing.
    pub fn from_roles(roles: &[Role]) -> Self {
        let permissions = roles
            .iter()
            .flat_map(|role| role.permissions.iter().cloned())
            .collect();
        Self { permissions }
    }

    pub fn contains(&self, permission: &Permission) -> bool {
        self.permissions.contains(permission)
    }

    pub fn contains_any(&self, permissions: &[Permission]) -> bool {
        permissions.iter().any(|p| self.permissions.contains(p))
    }

    pub fn contains_all(&self, permissions: &[Permission]) -> bool {
        !permissions.is_empty() && permissions.iter().all(|p| self.permissions.contains(p))
    }

    pub fn as_set(&self) -> &HashSet<Permission> {
        &self.permissions
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

/// All permissions granted to a principal, across every role it holds.
pub fn effective_permissions(principal: &Principal) -> &HashSet<Permission> {
    principal.permission_index().as_set()
}

pub fn has_permission(principal: &Principal, permission: &Permission) -> bool {
    principal.permission_index().contains(permission)
}

/// True if the principal holds at least one of `permissions`.
pub fn has_any(principal: &Principal, permissions: &[Permission]) -> bool {
    principal.permission_index().contains_any(permissions)
}

/// True if the principal holds every one of `permissions` and the list is non-empty.
pub fn has_all(principal: &Principal, permissions: &[Permission]) -> bool {
    principal.permission_index().contains_all(permissions)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
