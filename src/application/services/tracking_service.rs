//! Click registration and conversion attribution service.

use std::sync::Arc;

use crate::domain::entities::{NewClick, NewConversion};
use crate::domain::repositories::{ClickRepository, ConversionRepository};
use crate::error::AppError;
use crate::utils::validation::{validate_click_params, validate_postback_params};

/// Service for the tracking write path.
///
/// Orchestrates validation and store operations for the two write
/// operations: click registration (idempotent) and conversion attribution
/// (at most one conversion per click).
///
/// Repositories are injected as trait objects so the service can be exercised
/// against mocks or an in-memory store in tests.
pub struct TrackingService {
    clicks: Arc<dyn ClickRepository>,
    conversions: Arc<dyn ConversionRepository>,
}

impl TrackingService {
    /// Creates a new tracking service.
    pub fn new(clicks: Arc<dyn ClickRepository>, conversions: Arc<dyn ConversionRepository>) -> Self {
        Self {
            clicks,
            conversions,
        }
    }

    /// Registers a click from raw request parameters.
    ///
    /// Registration is idempotent: a repeated (affiliate, token) pair is
    /// silently treated as success, with exactly one stored row and the
    /// original timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] carrying every violated rule, or a
    /// store error from the insert.
    pub async fn register_click(
        &self,
        affiliate_id: &str,
        campaign_id: &str,
        click_id: &str,
    ) -> Result<(), AppError> {
        let params = validate_click_params(affiliate_id, campaign_id, click_id)
            .map_err(AppError::validation)?;

        self.clicks
            .insert_if_absent(NewClick {
                affiliate_id: params.affiliate_id,
                campaign_id: params.campaign_id,
                click_token: params.click_token.clone(),
            })
            .await?;

        tracing::debug!(
            affiliate_id = params.affiliate_id,
            campaign_id = params.campaign_id,
            click_token = %params.click_token,
            "click registered"
        );

        Ok(())
    }

    /// Attributes a conversion to a previously registered click.
    ///
    /// The existence check gives the common duplicate case a clean rejection
    /// without touching the stored conversion; the store's unique constraint
    /// on the click reference closes the race between concurrent postbacks,
    /// surfacing as [`AppError::DuplicateConversion`] from the insert.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if any parameter is invalid
    /// - [`AppError::InvalidClick`] if no click matches (affiliate, token)
    /// - [`AppError::DuplicateConversion`] if the click is already converted
    pub async fn register_conversion(
        &self,
        affiliate_id: &str,
        click_id: &str,
        amount: &str,
        currency: &str,
    ) -> Result<(), AppError> {
        let params = validate_postback_params(affiliate_id, click_id, amount, currency)
            .map_err(AppError::validation)?;

        let click = self
            .clicks
            .find_by_token(params.affiliate_id, &params.click_token)
            .await?
            .ok_or(AppError::InvalidClick)?;

        if self.conversions.exists_for_click(click.id).await? {
            return Err(AppError::DuplicateConversion);
        }

        let conversion = self
            .conversions
            .insert(NewConversion {
                click_id: click.id,
                amount: params.amount,
                currency: params.currency,
            })
            .await?;

        tracing::debug!(
            conversion_id = conversion.id,
            click_id = click.id,
            amount = %conversion.amount,
            currency = %conversion.currency,
            "conversion attributed"
        );

        Ok(())
    }
}
