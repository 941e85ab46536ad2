//! Access decision state machine for protected navigation.
//!
//! Rules are checked in a fixed order and the first match wins:
//!
//! | # | Condition                                      | Decision                                  |
//! |---|------------------------------------------------|-------------------------------------------|
//! | 1 | no principal                                   | redirect to sign-in, resuming the path    |
//! | 2 | external principal, job route shape            | allow                                     |
//! | 2 | external principal, anything else              | redirect to the external jobs list        |
//! | 3 | permission-checked route, authorizer says no   | fallback panel, or redirect to dashboard  |
//! | 4 | otherwise                                      | allow                                     |
//!
//! External principals are handled before the route authorizer and never
//! reach it: the policy table does not model their per-posting access.

use serde::Deserialize;
use tracing::debug;

use super::decision::Decision;
use super::external::is_external_job_route;
use crate::rbac::{Principal, RouteAuthorizer};
use crate::telemetry::mask_email;
use crate::telemetry::metrics::record_access_decision;

// ═══════════════════════════════════════════════════════════════════════════════
// Redirect Targets
// ═══════════════════════════════════════════════════════════════════════════════

/// Landing pages used by redirect decisions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RedirectTargets {
    /// Where unauthenticated requests are sent
    #[serde(default = "default_signin")]
    pub signin: String,

    /// Where internal principals land after a permission denial
    #[serde(default = "default_dashboard")]
    pub dashboard: String,

    /// The only landing page for external principals. It does not have the
    /// job route shape, so the navigation layer must not put it behind the
    /// guard or external principals loop on their own landing page.
    #[serde(default = "default_external_jobs")]
    pub external_jobs: String,
}

impl Default for RedirectTargets {
    fn default() -> Self {
        Self {
            signin: default_signin(),
            dashboard: default_dashboard(),
            external_jobs: default_external_jobs(),
        }
    }
}

fn default_signin() -> String { "/signin".to_string() }
fn default_dashboard() -> String { "/dashboard".to_string() }
fn default_external_jobs() -> String { "/external/jobs".to_string() }

// ═══════════════════════════════════════════════════════════════════════════════
// Access Request
// ═══════════════════════════════════════════════════════════════════════════════

/// A navigation target plus how the caller declared the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRequest {
    pub path: String,
    /// Run the route authorizer for this route.
    pub check_permissions: bool,
    /// The caller can render an in-place fallback view on denial.
    pub has_fallback: bool,
}

impl AccessRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            check_permissions: false,
            has_fallback: false,
        }
    }

    pub fn with_permission_check(mut self) -> Self {
        self.check_permissions = true;
        self
    }

    pub fn with_fallback(mut self) -> Self {
        self.has_fallback = true;
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Access Guard
// ═══════════════════════════════════════════════════════════════════════════════

/// The authorization gate for protected navigation.
///
/// Stateless between calls: the same principal, request and policy table
/// always yield the same decision.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    authorizer: RouteAuthorizer,
    targets: RedirectTargets,
}

impl AccessGuard {
    pub fn new(authorizer: RouteAuthorizer, targets: RedirectTargets) -> Self {
        Self { authorizer, targets }
    }

    pub fn authorizer(&self) -> &RouteAuthorizer {
        &self.authorizer
    }

    pub fn targets(&self) -> &RedirectTargets {
        &self.targets
    }

    /// Evaluate a navigation request. `None` means the request is unauthenticated.
    pub fn evaluate(&self, principal: Option<&Principal>, request: &AccessRequest) -> Decision {
        let path = request.path.as_str();

        let Some(principal) = principal else {
            return finish(
                "unauthenticated",
                None,
                path,
                Decision::redirect_resuming(&self.targets.signin, path),
            );
        };

        if principal.is_external() {
            let decision = if is_external_job_route(path) {
                Decision::Allow
            } else {
                Decision::redirect(&self.targets.external_jobs)
            };
            return finish("external", Some(principal), path, decision);
        }

        if request.check_permissions && !principal.is_super_admin() {
            let reason = self.authorizer.explain(principal, path);
            if !reason.is_allowed() {
                let decision = if request.has_fallback {
                    Decision::Deny { show_fallback: true }
                } else {
                    Decision::redirect(&self.targets.dashboard)
                };
                return finish("permission", Some(principal), path, decision);
            }
            debug!(principal = %principal.id(), path, reason = reason.as_str(), "Route permission satisfied");
        }

        finish("default", Some(principal), path, Decision::Allow)
    }

    /// A gate for routes already inside the authenticated shell.
    pub fn gate(&self, behavior: DeniedBehavior) -> PermissionGate {
        PermissionGate {
            authorizer: self.authorizer.clone(),
            dashboard: self.targets.dashboard.clone(),
            behavior,
        }
    }
}

fn masked_email(principal: Option<&Principal>) -> String {
    principal.map(|p| mask_email(p.email())).unwrap_or_default()
}

fn finish(
    rule: &'static str,
    principal: Option<&Principal>,
    path: &str,
    decision: Decision,
) -> Decision {
    debug!(
        principal = principal.map(|p| p.id().as_str()).unwrap_or("anonymous"),
        email = %masked_email(principal),
        path,
        rule,
        decision = %decision,
        "Access evaluated"
    );
    record_access_decision(rule, decision.outcome());
    decision
}

// ═══════════════════════════════════════════════════════════════════════════════
// Permission Gate
// ═══════════════════════════════════════════════════════════════════════════════

/// What a [`PermissionGate`] does when the authorizer says no.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeniedBehavior {
    /// Render the "access denied" panel in place.
    #[default]
    ShowPanel,
    /// Always send the principal back to the dashboard.
    Redirect,
}

/// Permission check for content nested inside an authenticated shell.
///
/// Authentication is already established there, so this skips straight to
/// the route authorizer. It shares the authorizer with the [`AccessGuard`]
/// it was created from.
#[derive(Debug, Clone)]
pub struct PermissionGate {
    authorizer: RouteAuthorizer,
    dashboard: String,
    behavior: DeniedBehavior,
}

impl PermissionGate {
    pub fn behavior(&self) -> DeniedBehavior {
        self.behavior
    }

    pub fn evaluate(&self, principal: &Principal, path: &str) -> Decision {
        let decision = if self.authorizer.can_access(principal, path) {
            Decision::Allow
        } else {
            match self.behavior {
                DeniedBehavior::ShowPanel => Decision::Deny { show_fallback: true },
                DeniedBehavior::Redirect => Decision::redirect(&self.dashboard),
            }
        };
        finish("gate", Some(principal), path, decision)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rbac::{PolicyTable, PrincipalKind, Role};
    use std::sync::Arc;

    fn guard() -> AccessGuard {
        let table = PolicyTable::builder()
            .route("/dashboard/admin", ["admin:access"])
            .build()
            .unwrap();
        AccessGuard::new(RouteAuthorizer::new(Arc::new(table)), RedirectTargets::default())
    }

    fn internal(roles: Vec<Role>) -> Principal {
        Principal::new("u1", "u1@example.com", PrincipalKind::Internal, roles)
    }

    fn recruiter() -> Principal {
        internal(vec![Role::new("internal-recruiter", ["dashboard:access"])])
    }

    #[test]
    fn test_logged_email_is_masked() {
        let principal = Principal::new(
            "u1",
            "jane.doe@acme.io",
            PrincipalKind::Internal,
            Vec::new(),
        );
        assert_eq!(masked_email(Some(&principal)), "j***@acme.io");
        assert_eq!(masked_email(None), "");
    }

    #[test]
    fn test_external_landing_page_is_not_a_job_route() {
        let external = Principal::new("x1", "x1@agency.io", PrincipalKind::External, Vec::new());
        let landing = RedirectTargets::default().external_jobs;
        assert_eq!(
            guard().evaluate(Some(&external), &AccessRequest::new(landing.as_str())),
            Decision::redirect(&landing)
        );
    }

    #[test]
    fn test_unauthenticated_redirects_with_resume() {
        let decision = guard().evaluate(None, &AccessRequest::new("/dashboard/admin/users"));
        assert_eq!(
            decision,
            Decision::redirect_resuming("/signin", "/dashboard/admin/users")
        );
    }

    #[test]
    fn test_unauthenticated_takes_priority_over_everything() {
        let request = AccessRequest::new("/jobs/1/ats").with_permission_check().with_fallback();
        assert_eq!(guard().evaluate(None, &request).redirect_target(), Some("/signin"));
    }

    #[test]
    fn test_permission_denied_redirects_to_dashboard() {
        let request = AccessRequest::new("/dashboard/admin").with_permission_check();
        assert_eq!(
            guard().evaluate(Some(&recruiter()), &request),
            Decision::redirect("/dashboard")
        );
    }

    #[test]
    fn test_permission_denied_with_fallback() {
        let request = AccessRequest::new("/dashboard/admin")
            .with_permission_check()
            .with_fallback();
        assert_eq!(
            guard().evaluate(Some(&recruiter()), &request),
            Decision::Deny { show_fallback: true }
        );
    }

    #[test]
    fn test_unchecked_route_allows() {
        let request = AccessRequest::new("/dashboard/admin");
        assert!(guard().evaluate(Some(&recruiter()), &request).is_allowed());
    }

    #[test]
    fn test_granted_permission_allows() {
        let admin = internal(vec![Role::new("admin", ["admin:access"])]);
        let request = AccessRequest::new("/dashboard/admin").with_permission_check();
        assert!(guard().evaluate(Some(&admin), &request).is_allowed());
    }

    #[test]
    fn test_super_admin_allows() {
        let root = internal(vec![Role::new("super-admin", Vec::<&str>::new())]);
        let request = AccessRequest::new("/dashboard/admin").with_permission_check();
        assert!(guard().evaluate(Some(&root), &request).is_allowed());
    }

    #[test]
    fn test_external_ignores_permissions() {
        let external = Principal::new(
            "x1",
            "agency@example.com",
            PrincipalKind::External,
            vec![Role::new("super-admin", ["admin:access"])],
        );
        let request = AccessRequest::new("/dashboard/admin").with_permission_check();
        assert_eq!(
            guard().evaluate(Some(&external), &request),
            Decision::redirect("/external/jobs")
        );
        assert!(guard()
            .evaluate(Some(&external), &AccessRequest::new("/jobs/9/ats"))
            .is_allowed());
    }

    #[test]
    fn test_custom_targets() {
        let table = Arc::new(PolicyTable::recruitment_defaults());
        let targets = RedirectTargets {
            signin: "/login".into(),
            dashboard: "/home".into(),
            external_jobs: "/partners".into(),
        };
        let guard = AccessGuard::new(RouteAuthorizer::new(table), targets);
        let request = AccessRequest::new("/dashboard/settings").with_permission_check();
        assert_eq!(guard.evaluate(Some(&recruiter()), &request), Decision::redirect("/home"));
        assert_eq!(
            guard.evaluate(None, &request),
            Decision::redirect_resuming("/login", "/dashboard/settings")
        );
    }

    #[test]
    fn test_gate_behaviors() {
        let guard = guard();
        let panel = guard.gate(DeniedBehavior::ShowPanel);
        let redirect = guard.gate(DeniedBehavior::Redirect);

        assert_eq!(
            panel.evaluate(&recruiter(), "/dashboard/admin"),
            Decision::Deny { show_fallback: true }
        );
        assert_eq!(
            redirect.evaluate(&recruiter(), "/dashboard/admin"),
            Decision::redirect("/dashboard")
        );
        assert!(panel.evaluate(&recruiter(), "/dashboard/jobs").is_allowed());
    }

    #[test]
    fn test_gate_agrees_with_authorizer() {
        let guard = guard();
        let gate = guard.gate(DeniedBehavior::Redirect);
        for path in ["/dashboard", "/dashboard/admin", "/dashboard/admin/users"] {
            assert_eq!(
                gate.evaluate(&recruiter(), path).is_allowed(),
                guard.authorizer().can_access(&recruiter(), path)
            );
        }
    }
}
