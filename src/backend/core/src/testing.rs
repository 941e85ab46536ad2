//! Test doubles for code that consumes Talentgate decisions.
//!
//! - [`PrincipalBuilder`]: concise principal construction
//! - [`StaticDirectory`]: in-memory membership directory with a call counter
//! - [`FailingDirectory`]: a directory whose lookups always fail
//!
//! # Example
//!
//! ```
//! use talentgate_core::testing::{PrincipalBuilder, StaticDirectory};
//! use talentgate_core::rbac::PredefinedRole;
//!
//! let recruiter = PrincipalBuilder::new("u1")
//!     .predefined(PredefinedRole::InternalRecruiter)
//!     .build();
//! let directory = StaticDirectory::new().with_member("u1", "acme");
//!
//! assert!(!recruiter.is_admin());
//! assert_eq!(directory.calls(), 0);
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{AccessError, Result};
use crate::rbac::{
    CompanyMembership, PredefinedRole, Principal, PrincipalId, PrincipalKind, Role,
};
use crate::tenancy::MembershipDirectory;

// ═══════════════════════════════════════════════════════════════════════════════
// Principal Builder
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct PrincipalBuilder {
    id: String,
    email: Option<String>,
    kind: PrincipalKind,
    roles: Vec<Role>,
}

impl PrincipalBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
            kind: PrincipalKind::Internal,
            roles: Vec::new(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn external(mut self) -> Self {
        self.kind = PrincipalKind::External;
        self
    }

    pub fn role<I, P>(mut self, name: &str, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<crate::rbac::Permission>,
    {
        self.roles.push(Role::new(name, permissions));
        self
    }

    pub fn predefined(mut self, role: PredefinedRole) -> Self {
        self.roles.push(role.to_role());
        self
    }

    pub fn super_admin(self) -> Self {
        self.predefined(PredefinedRole::SuperAdmin)
    }

    pub fn build(self) -> Principal {
        let email = self
            .email
            .unwrap_or_else(|| format!("{}@example.com", self.id));
        Principal::new(self.id, email, self.kind, self.roles)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Directories
// ═══════════════════════════════════════════════════════════════════════════════

/// In-memory directory. Unknown principals have no memberships.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    memberships: HashMap<PrincipalId, Vec<CompanyMembership>>,
    calls: AtomicUsize,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_membership(mut self, principal: &str, membership: CompanyMembership) -> Self {
        self.memberships
            .entry(PrincipalId::new(principal))
            .or_default()
            .push(membership);
        self
    }

    pub fn with_member(self, principal: &str, company: &str) -> Self {
        self.with_membership(principal, CompanyMembership::member(company))
    }

    /// Number of lookups served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MembershipDirectory for StaticDirectory {
    async fn memberships(&self, principal: &PrincipalId) -> Result<Vec<CompanyMembership>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.memberships.get(principal).cloned().unwrap_or_default())
    }
}

/// Directory whose every lookup fails with a transient error.
#[derive(Debug, Clone)]
pub struct FailingDirectory {
    reason: String,
}

impl FailingDirectory {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl MembershipDirectory for FailingDirectory {
    async fn memberships(&self, principal: &PrincipalId) -> Result<Vec<CompanyMembership>> {
        Err(AccessError::membership_fetch(principal.as_str(), self.reason.clone()))
    }
}
