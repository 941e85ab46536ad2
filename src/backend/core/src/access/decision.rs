//! Decision values returned to the navigation layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of one access evaluation.
///
/// Produced fresh per call and never cached. The caller performs the
/// redirect or renders the fallback; this crate never navigates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Decision {
    /// Render the requested view.
    Allow,
    /// Navigate to `target` instead.
    Redirect {
        target: String,
        /// Path to return to once the principal has signed in.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        resume: Option<String>,
    },
    /// Stay on the route but do not render its content. With
    /// `show_fallback` the caller renders its "access denied" view.
    Deny { show_fallback: bool },
}

impl Decision {
    pub fn redirect(target: impl Into<String>) -> Self {
        Self::Redirect {
            target: target.into(),
            resume: None,
        }
    }

    pub fn redirect_resuming(target: impl Into<String>, resume: impl Into<String>) -> Self {
        Self::Redirect {
            target: target.into(),
            resume: Some(resume.into()),
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Redirect { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Short label used for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Redirect { .. } => "redirect",
            Self::Deny { .. } => "deny",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Redirect {
                target,
                resume: Some(resume),
            } => write!(f, "redirect to {} (resume {})", target, resume),
            Self::Redirect { target, resume: None } => write!(f, "redirect to {}", target),
            Self::Deny { show_fallback } => write!(f, "deny (fallback: {})", show_fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(Decision::redirect_resuming("/signin", "/dashboard/admin"))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "redirect", "target": "/signin", "resume": "/dashboard/admin"})
        );

        let json = serde_json::to_value(Decision::redirect("/dashboard")).unwrap();
        assert_eq!(json, serde_json::json!({"type": "redirect", "target": "/dashboard"}));

        let json = serde_json::to_value(Decision::Deny { show_fallback: true }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "deny", "show_fallback": true}));
    }

    #[test]
    fn test_accessors() {
        assert!(Decision::Allow.is_allowed());
        assert_eq!(Decision::redirect("/x").redirect_target(), Some("/x"));
        assert_eq!(Decision::Deny { show_fallback: false }.redirect_target(), None);
        assert_eq!(Decision::Deny { show_fallback: false }.outcome(), "deny");
    }
}
