//! Role-based access control for dashboard navigation.
//!
//! This module provides:
//! - **Models**: Permission, Role, Principal, CompanyMembership
//! - **Role Classes**: the closed set of role names with special meaning
//! - **Permission Index**: a principal's flattened permission set
//! - **Policy Table**: static route → permission-set configuration
//! - **Route Authorizer**: combines the two to answer "can this principal reach this path?"
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use talentgate_core::rbac::{PolicyTable, Principal, PrincipalKind, Role, RouteAuthorizer};
//!
//! let table = PolicyTable::builder()
//!     .route("/dashboard/admin", ["admin:access"])
//!     .build()
//!     .unwrap();
//! let authorizer = RouteAuthorizer::new(Arc::new(table));
//!
//! let recruiter = Principal::new(
//!     "u-42",
//!     "recruiter@example.com",
//!     PrincipalKind::Internal,
//!     vec![Role::new("internal-recruiter", ["dashboard:access"])],
//! );
//!
//! assert!(!authorizer.can_access(&recruiter, "/dashboard/admin"));
//! // Unlisted routes are allowed.
//! assert!(authorizer.can_access(&recruiter, "/dashboard"));
//! ```

pub mod authorizer;
pub mod models;
pub mod permissions;
pub mod policy;
pub mod roles;

pub use authorizer::{AccessReason, RouteAuthorizer};
pub use models::{
    CompanyId, CompanyMembership, MembershipRelationship, Permission, Principal, PrincipalId,
    PrincipalKind, Role,
};
pub use permissions::{effective_permissions, has_all, has_any, has_permission, PermissionIndex};
pub use policy::{PolicyEntry, PolicyTable, PolicyTableBuilder};
pub use roles::{PredefinedRole, RoleClass};
