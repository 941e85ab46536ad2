//! # Talentgate Core
//!
//! Route authorization and tenancy resolution for the Talentgate recruitment
//! dashboard.
//!
//! ## Architecture
//!
//! - **RBAC**: principals, roles, permission index, route policy table and route authorizer
//! - **Access**: the decision state machine that turns a navigation request into allow / redirect / deny
//! - **Tenancy**: picks the company context a principal lands in after access is granted
//! - **Navigation**: route patterns for active-entry highlighting
//! - **Config**: policy table and redirect targets from file and environment
//! - **Telemetry**: structured logging and decision counters
//!
//! Every function takes the principal and policy explicitly. Nothing reads
//! ambient session state, and nothing here performs navigation or I/O apart
//! from the membership lookup the caller plugs in.

pub mod access;
pub mod config;
pub mod error;
pub mod navigation;
pub mod rbac;
pub mod telemetry;
pub mod tenancy;
pub mod testing;

pub use error::{AccessError, ErrorCode, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::access::{
        AccessGuard, AccessRequest, Decision, DeniedBehavior, PermissionGate, RedirectTargets,
    };
    pub use crate::config::Config;
    pub use crate::error::{AccessError, ErrorCode, Result};
    pub use crate::navigation::RoutePattern;
    pub use crate::rbac::{
        CompanyId, CompanyMembership, MembershipRelationship, Permission, PolicyTable,
        PredefinedRole, Principal, PrincipalId, PrincipalKind, Role, RoleClass, RouteAuthorizer,
    };
    pub use crate::tenancy::{
        resolve_company_context, MembershipDirectory, TenancyOutcome, TenancySession,
        TenancyState,
    };
}
