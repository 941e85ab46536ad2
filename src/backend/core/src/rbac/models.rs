//! RBAC data models: Permission, Role, Principal identity, and company membership.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::permissions::PermissionIndex;
use super::roles::RoleClass;

// ═══════════════════════════════════════════════════════════════════════════════
// Identifiers
// ═══════════════════════════════════════════════════════════════════════════════

/// Strongly-typed principal identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(pub String);

impl PrincipalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PrincipalId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Strongly-typed company (tenant) identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(pub String);

impl CompanyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CompanyId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Permission
// ═══════════════════════════════════════════════════════════════════════════════

/// An opaque capability identifier.
///
/// Permissions are conventionally written `domain:action` (for example
/// `admin:users` or `jobs:manage`), but the value is compared by equality
/// only. Nothing in this crate inspects the parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(String);

impl Permission {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Permission {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Permission {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Role
// ═══════════════════════════════════════════════════════════════════════════════

/// A named bundle of permissions attached to a principal.
///
/// The permission list may be empty, and a list missing from serialized input
/// is read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl Role {
    pub fn new<I, P>(name: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Permission>,
    {
        Self {
            name: name.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// The recognized class of this role's name.
    pub fn class(&self) -> RoleClass {
        RoleClass::classify(&self.name)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Principal
// ═══════════════════════════════════════════════════════════════════════════════

/// Whether a principal belongs to the hiring organization or is an outside
/// party restricted to specific job postings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrincipalKind {
    #[default]
    Internal,
    External,
}

/// The authenticated actor.
///
/// Built once per session by the authentication provider and treated as an
/// immutable snapshot. Role classes and effective permissions are derived at
/// construction and rebuilt whenever the role set is replaced.
#[derive(Debug, Clone)]
pub struct Principal {
    id: PrincipalId,
    email: String,
    kind: PrincipalKind,
    roles: Vec<Role>,
    classes: HashSet<RoleClass>,
    index: PermissionIndex,
}

impl Principal {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        kind: PrincipalKind,
        roles: Vec<Role>,
    ) -> Self {
        let classes = roles.iter().map(Role::class).collect();
        let index = PermissionIndex::from_roles(&roles);
        Self {
            id: PrincipalId::new(id),
            email: email.into(),
            kind,
            roles,
            classes,
            index,
        }
    }

    /// Return a copy of this principal holding a different role set.
    pub fn with_roles(&self, roles: Vec<Role>) -> Self {
        Self::new(self.id.0.clone(), self.email.clone(), self.kind, roles)
    }

    /// Replace the role set, rebuilding all derived state.
    pub fn set_roles(&mut self, roles: Vec<Role>) {
        *self = self.with_roles(roles);
    }

    pub fn id(&self) -> &PrincipalId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn kind(&self) -> PrincipalKind {
        self.kind
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn is_external(&self) -> bool {
        self.kind == PrincipalKind::External
    }

    pub fn is_super_admin(&self) -> bool {
        self.classes.contains(&RoleClass::SuperAdmin)
    }

    pub fn is_admin(&self) -> bool {
        self.classes
            .iter()
            .any(|c| matches!(c, RoleClass::Admin | RoleClass::SuperAdmin))
    }

    pub(crate) fn permission_index(&self) -> &PermissionIndex {
        &self.index
    }

    /// Order-independent digest of the role set.
    ///
    /// Two principals with the same roles in a different order produce the
    /// same fingerprint.
    pub fn role_fingerprint(&self) -> u64 {
        let mut entries: Vec<(String, Vec<&str>)> = self
            .roles
            .iter()
            .map(|r| {
                let mut perms: Vec<&str> = r.permissions.iter().map(Permission::as_str).collect();
                perms.sort_unstable();
                perms.dedup();
                (RoleClass::normalize(&r.name), perms)
            })
            .collect();
        entries.sort();
        entries.dedup();

        let mut hasher = DefaultHasher::new();
        entries.hash(&mut hasher);
        hasher.finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Company membership (tenant data)
// ═══════════════════════════════════════════════════════════════════════════════

/// How a principal relates to a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipRelationship {
    /// Super-admins enumerating the companies they own.
    Owner,
    Member,
}

/// A principal's link to one company, as reported by the company directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyMembership {
    pub company_id: CompanyId,
    pub relationship: MembershipRelationship,
}

impl CompanyMembership {
    pub fn member(company_id: impl Into<String>) -> Self {
        Self {
            company_id: CompanyId::new(company_id),
            relationship: MembershipRelationship::Member,
        }
    }

    pub fn owner(company_id: impl Into<String>) -> Self {
        Self {
            company_id: CompanyId::new(company_id),
            relationship: MembershipRelationship::Owner,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
