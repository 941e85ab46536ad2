//! Route shapes reachable by external principals.
//!
//! External principals (agency recruiters, hiring partners) only see the
//! job postings they were invited to. Two structural shapes qualify:
//!
//! - any path whose last segment is `ats` (`.../ats`)
//! - exactly `/jobs/<id>/<slug>`, with no further nesting
//!
//! The check is purely structural and does not consult the policy table.

const JOBS_PREFIX: &str = "/jobs/";

/// True if an external principal may open `path`.
pub fn is_external_job_route(path: &str) -> bool {
    path.ends_with("/ats") || is_job_detail_route(path)
}

fn is_job_detail_route(path: &str) -> bool {
    let Some(rest) = path.strip_prefix(JOBS_PREFIX) else {
        return false;
    };
    let mut segments = rest.split('/');
    matches!(
        (segments.next(), segments.next(), segments.next()),
        (Some(id), Some(slug), None) if !id.is_empty() && !slug.is_empty()
    )
}
