//! Repository trait for conversion data access.

use crate::domain::entities::{Conversion, ConversionWithClick, NewConversion};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for attributing and reading conversions.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgConversionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConversionRepository: Send + Sync {
    /// Returns whether a conversion already exists for the given click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists_for_click(&self, click_id: i64) -> Result<bool, AppError>;

    /// Inserts a new conversion referencing a click.
    ///
    /// The store carries a unique constraint on the click reference, so two
    /// concurrent postbacks for the same click cannot both succeed: the loser
    /// gets [`AppError::DuplicateConversion`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateConversion`] if the click already has a
    /// conversion, [`AppError::StoreUnavailable`] if the store is unreachable
    /// and [`AppError::Internal`] on other database errors.
    async fn insert(&self, new_conversion: NewConversion) -> Result<Conversion, AppError>;

    /// Lists all conversions whose click belongs to the affiliate, annotated
    /// with the original click token and campaign name, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_affiliate(
        &self,
        affiliate_id: i64,
    ) -> Result<Vec<ConversionWithClick>, AppError>;
}
