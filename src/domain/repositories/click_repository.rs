//! Repository trait for click data access.

use crate::domain::entities::{Click, ClickWithCampaign, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for registering and reading clicks.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Inserts a click unless one already exists for the same
    /// (affiliate, click token) pair.
    ///
    /// Duplicate registration is a no-op: no error, no second row, and the
    /// original timestamp is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidReference`] if the affiliate or campaign
    /// does not exist, [`AppError::StoreUnavailable`] if the store is
    /// unreachable and [`AppError::Internal`] on other database errors.
    async fn insert_if_absent(&self, new_click: NewClick) -> Result<(), AppError>;

    /// Finds a click by affiliate and external click token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_token(
        &self,
        affiliate_id: i64,
        click_token: &str,
    ) -> Result<Option<Click>, AppError>;

    /// Lists all clicks for an affiliate, annotated with the campaign name,
    /// newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_affiliate(
        &self,
        affiliate_id: i64,
    ) -> Result<Vec<ClickWithCampaign>, AppError>;
}
