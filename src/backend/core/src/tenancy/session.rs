//! Tenancy resolution lifecycle for one signed-in principal.
//!
//! ```text
//!            begin()                 complete(Ok)
//!   Idle ───────────────▶ Loading ─────────────────▶ Resolved(outcome)
//!                            │
//!                            │ complete(Err)
//!                            ▼
//!                       Unavailable(reason)
//! ```
//!
//! Every `begin` supersedes earlier fetches. A result delivered with an
//! older ticket is dropped, so a slow response for a previous principal (or
//! a previous role set) can never be applied to the current one. Ordering is
//! by `begin` call, not by response arrival. Each ticket leaves `Loading`
//! at most once; a second delivery for the same ticket is dropped as well.

use tracing::{debug, warn};

use super::directory::MembershipDirectory;
use super::disambiguator::{resolve_company_context, TenancyOutcome};
use crate::error::Result;
use crate::rbac::{CompanyMembership, Principal, PrincipalId};
use crate::telemetry::metrics::record_stale_membership_result;

/// Observable state of a [`TenancySession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenancyState {
    /// Nothing requested yet.
    Idle,
    /// Waiting for the membership lookup. Not the same as "no access".
    Loading,
    Resolved(TenancyOutcome),
    /// The lookup failed; the caller may retry. Never a permanent denial.
    Unavailable(String),
}

impl TenancyState {
    pub fn outcome(&self) -> Option<&TenancyOutcome> {
        match self {
            Self::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Handle for one membership fetch started by [`TenancySession::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    principal: PrincipalId,
    needs_fetch: bool,
}

impl FetchTicket {
    /// The principal whose memberships must be fetched.
    pub fn principal(&self) -> &PrincipalId {
        &self.principal
    }

    /// False when the outcome was decided without a lookup (super-admins).
    pub fn needs_fetch(&self) -> bool {
        self.needs_fetch
    }
}

/// Caller-owned tenancy state machine. Holds no locks; mutate through `&mut self`.
#[derive(Debug)]
pub struct TenancySession {
    state: TenancyState,
    generation: u64,
    current: Option<(Principal, u64)>,
}

impl TenancySession {
    pub fn new() -> Self {
        Self {
            state: TenancyState::Idle,
            generation: 0,
            current: None,
        }
    }

    pub fn state(&self) -> &TenancyState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == TenancyState::Loading
    }

    /// Start resolution for `principal`, superseding any outstanding fetch.
    pub fn begin(&mut self, principal: &Principal) -> FetchTicket {
        self.generation += 1;
        self.current = Some((principal.clone(), principal.role_fingerprint()));

        let needs_fetch = !principal.is_super_admin();
        self.state = if needs_fetch {
            TenancyState::Loading
        } else {
            TenancyState::Resolved(resolve_company_context(principal, &[]))
        };
        debug!(
            principal = %principal.id(),
            generation = self.generation,
            needs_fetch,
            "Tenancy resolution started"
        );

        FetchTicket {
            generation: self.generation,
            principal: principal.id().clone(),
            needs_fetch,
        }
    }

    /// Restart resolution if `principal` differs from the one being resolved,
    /// by identity or by role set. Returns the new ticket, if any.
    pub fn observe(&mut self, principal: &Principal) -> Option<FetchTicket> {
        let unchanged = self.current.as_ref().is_some_and(|(current, fingerprint)| {
            current.id() == principal.id() && *fingerprint == principal.role_fingerprint()
        });
        if unchanged {
            None
        } else {
            Some(self.begin(principal))
        }
    }

    /// Apply a lookup result. Returns `false` if the result was discarded
    /// because a newer `begin` superseded `ticket` or `ticket` already settled.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<CompanyMembership>>,
    ) -> bool {
        if !ticket.needs_fetch {
            return false;
        }
        if ticket.generation != self.generation {
            warn!(
                principal = %ticket.principal,
                ticket = ticket.generation,
                current = self.generation,
                "Discarding superseded membership result"
            );
            record_stale_membership_result();
            return false;
        }
        if !self.is_loading() {
            warn!(
                principal = %ticket.principal,
                ticket = ticket.generation,
                "Ignoring repeated membership result for a settled fetch"
            );
            record_stale_membership_result();
            return false;
        }

        let Some((principal, _)) = self.current.as_ref() else {
            return false;
        };

        self.state = match result {
            Ok(memberships) => TenancyState::Resolved(resolve_company_context(principal, &memberships)),
            Err(err) => {
                warn!(principal = %principal.id(), error = %err, "Membership lookup failed");
                TenancyState::Unavailable(err.to_string())
            }
        };
        true
    }

    /// Begin, fetch from `directory` when needed, and complete.
    pub async fn resolve<D>(&mut self, principal: &Principal, directory: &D) -> &TenancyState
    where
        D: MembershipDirectory + ?Sized,
    {
        let ticket = self.begin(principal);
        if ticket.needs_fetch() {
            let result = directory.memberships(ticket.principal()).await;
            self.complete(&ticket, result);
        }
        &self.state
    }
}

impl Default for TenancySession {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
