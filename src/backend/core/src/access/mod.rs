//! Navigation access decisions.
//!
//! [`AccessGuard`] turns a (principal, requested path) pair into a
//! [`Decision`]: allow, redirect somewhere safe, or deny in place. It wraps
//! the [`RouteAuthorizer`](crate::rbac::RouteAuthorizer) with the cases the
//! policy table does not cover: unauthenticated requests and external
//! principals.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use talentgate_core::access::{AccessGuard, AccessRequest, Decision, RedirectTargets};
//! use talentgate_core::rbac::{PolicyTable, RouteAuthorizer};
//!
//! let authorizer = RouteAuthorizer::new(Arc::new(PolicyTable::recruitment_defaults()));
//! let guard = AccessGuard::new(authorizer, RedirectTargets::default());
//!
//! let decision = guard.evaluate(None, &AccessRequest::new("/dashboard/admin/users"));
//! assert_eq!(
//!     decision,
//!     Decision::redirect_resuming("/signin", "/dashboard/admin/users"),
//! );
//! ```

pub mod decision;
pub mod external;
pub mod guard;

pub use decision::Decision;
pub use external::is_external_job_route;
pub use guard::{AccessGuard, AccessRequest, DeniedBehavior, PermissionGate, RedirectTargets};
