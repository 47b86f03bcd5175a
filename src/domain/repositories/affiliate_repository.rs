//! Repository trait for affiliate data access.

use crate::domain::entities::Affiliate;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for reading affiliates.
///
/// Affiliates are provisioned out-of-band, so the interface is read-only.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAffiliateRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AffiliateRepository: Send + Sync {
    /// Lists all affiliates ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store is unreachable and
    /// [`AppError::Internal`] on other database errors.
    async fn list_all(&self) -> Result<Vec<Affiliate>, AppError>;
}
