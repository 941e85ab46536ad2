//! Company directory lookup seam.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::rbac::{CompanyMembership, PrincipalId};

/// External company/organization directory.
///
/// Implementations typically call the platform's company API. A failed
/// lookup must return `Err`, never an empty list: an empty list means the
/// principal has no companies, an error means the answer is unknown.
#[async_trait]
pub trait MembershipDirectory: Send + Sync {
    async fn memberships(&self, principal: &PrincipalId) -> Result<Vec<CompanyMembership>>;
}

#[async_trait]
impl<T: MembershipDirectory + ?Sized> MembershipDirectory for Arc<T> {
    async fn memberships(&self, principal: &PrincipalId) -> Result<Vec<CompanyMembership>> {
        (**self).memberships(principal).await
    }
}
