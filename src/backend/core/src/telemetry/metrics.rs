//! Decision counters.
//!
//! Recorded through the `metrics` facade; the embedding application installs
//! whichever recorder it exports with. Without a recorder these are no-ops.

use metrics::counter;

pub const ACCESS_DECISIONS_TOTAL: &str = "talentgate_access_decisions_total";
pub const TENANCY_OUTCOMES_TOTAL: &str = "talentgate_tenancy_outcomes_total";
pub const TENANCY_STALE_RESULTS_TOTAL: &str = "talentgate_tenancy_stale_results_total";

/// Count one access evaluation. `rule` names the guard rule that fired.
pub fn record_access_decision(rule: &'static str, outcome: &'static str) {
    counter!(ACCESS_DECISIONS_TOTAL, "rule" => rule, "outcome" => outcome).increment(1);
}

/// Count one tenancy resolution.
pub fn record_tenancy_outcome(outcome: &'static str) {
    counter!(TENANCY_OUTCOMES_TOTAL, "outcome" => outcome).increment(1);
}

/// Count a membership result dropped because a newer fetch superseded it.
pub fn record_stale_membership_result() {
    counter!(TENANCY_STALE_RESULTS_TOTAL).increment(1);
}
