//! Company context resolution after a successful access decision.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::rbac::{CompanyId, CompanyMembership, Principal};
use crate::telemetry::metrics::record_tenancy_outcome;

/// Where a principal lands once its company memberships are known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "company_id", rename_all = "snake_case")]
pub enum TenancyOutcome {
    /// Authenticated, but a member of no company.
    ErrorNoAccess,
    /// Exactly one company: go straight there.
    AutoRedirect(CompanyId),
    /// Let the principal choose.
    ShowPicker,
}

impl TenancyOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ErrorNoAccess => "error_no_access",
            Self::AutoRedirect(_) => "auto_redirect",
            Self::ShowPicker => "show_picker",
        }
    }
}

/// Decide the company context for `principal`.
///
/// Super-admins always get the picker and are never auto-routed, whatever
/// `memberships` holds. For everyone else: none → no access, one → redirect
/// into it, several → picker.
///
/// Several memberships for a non-super-admin contradicts the business rule
/// that such principals belong to exactly one company. It is handled with
/// the picker rather than by choosing the first entry, and logged at `warn`.
pub fn resolve_company_context(
    principal: &Principal,
    memberships: &[CompanyMembership],
) -> TenancyOutcome {
    let (outcome, label) = if principal.is_super_admin() {
        (TenancyOutcome::ShowPicker, "show_picker")
    } else {
        match memberships {
            [] => (TenancyOutcome::ErrorNoAccess, "error_no_access"),
            [only] => (
                TenancyOutcome::AutoRedirect(only.company_id.clone()),
                "auto_redirect",
            ),
            _ => {
                warn!(
                    principal = %principal.id(),
                    memberships = memberships.len(),
                    "Non-super-admin principal belongs to several companies; showing picker"
                );
                (TenancyOutcome::ShowPicker, "multi_membership")
            }
        }
    };

    debug!(principal = %principal.id(), outcome = outcome.as_str(), "Company context resolved");
    record_tenancy_outcome(label);
    outcome
}
