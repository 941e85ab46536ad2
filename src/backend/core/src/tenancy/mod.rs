//! Tenancy disambiguation: which company a principal operates in.
//!
//! Runs after an [`AccessGuard`](crate::access::AccessGuard) allowed a
//! company-scoped entry point. Memberships are tenant data, not identity
//! data, so they are fetched from a [`MembershipDirectory`] rather than
//! carried on the [`Principal`](crate::rbac::Principal).
//!
//! - [`resolve_company_context`]: the pure decision over a known membership list
//! - [`TenancySession`]: the Loading → resolved lifecycle around the async lookup

pub mod directory;
pub mod disambiguator;
pub mod session;

pub use directory::MembershipDirectory;
pub use disambiguator::{resolve_company_context, TenancyOutcome};
pub use session::{FetchTicket, TenancySession, TenancyState};
