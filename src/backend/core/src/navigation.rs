//! Route patterns for active navigation highlighting.
//!
//! Purely cosmetic: deciding which sidebar entry is highlighted for the
//! current path. Authorization never uses these patterns; the policy table
//! matches exact paths only.

use serde::{Deserialize, Serialize};

/// A navigation entry's notion of "this is the current page".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "match", content = "path", rename_all = "snake_case")]
pub enum RoutePattern {
    /// Only this exact path.
    Exact(String),
    /// This path and everything below it: `/x` matches `/x` and `/x/...`, not `/xy`.
    Prefix(String),
}

impl RoutePattern {
    pub fn exact(path: impl Into<String>) -> Self {
        Self::Exact(path.into())
    }

    pub fn prefix(path: impl Into<String>) -> Self {
        Self::Prefix(path.into())
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(p) => p == path,
            Self::Prefix(p) => {
                let base = p.trim_end_matches('/');
                match path.strip_prefix(base) {
                    Some(rest) => rest.is_empty() || rest.starts_with('/'),
                    None => false,
                }
            }
        }
    }
}

/// Index of the pattern that best matches `path`: an exact match wins, then
/// the longest matching prefix.
pub fn active_index(patterns: &[RoutePattern], path: &str) -> Option<usize> {
    patterns
        .iter()
        .enumerate()
        .filter(|(_, pattern)| pattern.matches(path))
        .max_by_key(|(_, pattern)| match pattern {
            RoutePattern::Exact(p) => (1, p.len()),
            RoutePattern::Prefix(p) => (0, p.len()),
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact() {
        let pattern = RoutePattern::exact("/dashboard");
        assert!(pattern.matches("/dashboard"));
        assert!(!pattern.matches("/dashboard/jobs"));
    }

    #[test]
    fn test_prefix() {
        let pattern = RoutePattern::prefix("/dashboard/jobs");
        assert!(pattern.matches("/dashboard/jobs"));
        assert!(pattern.matches("/dashboard/jobs/42/edit"));
        assert!(!pattern.matches("/dashboard/jobsboard"));
        assert!(!pattern.matches("/dashboard"));
    }

    #[test]
    fn test_prefix_trailing_slash() {
        let pattern = RoutePattern::prefix("/dashboard/");
        assert!(pattern.matches("/dashboard"));
        assert!(pattern.matches("/dashboard/admin"));
    }

    #[test]
    fn test_active_index_prefers_specific() {
        let patterns = vec![
            RoutePattern::prefix("/dashboard"),
            RoutePattern::prefix("/dashboard/admin"),
            RoutePattern::exact("/dashboard/admin/users"),
        ];
        assert_eq!(active_index(&patterns, "/dashboard/jobs"), Some(0));
        assert_eq!(active_index(&patterns, "/dashboard/admin/roles"), Some(1));
        assert_eq!(active_index(&patterns, "/dashboard/admin/users"), Some(2));
        assert_eq!(active_index(&patterns, "/signin"), None);
    }
}
