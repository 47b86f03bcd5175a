//! Read-only reporting service for the dashboard.

use std::sync::Arc;

use crate::domain::entities::{Affiliate, ClickWithCampaign, ConversionWithClick};
use crate::domain::repositories::{AffiliateRepository, ClickRepository, ConversionRepository};
use crate::error::AppError;

/// Service for per-affiliate reporting reads.
///
/// Returns raw annotated rows only; aggregation (counts, conversion rate,
/// revenue) is computed by the consuming layer.
pub struct QueryService {
    affiliates: Arc<dyn AffiliateRepository>,
    clicks: Arc<dyn ClickRepository>,
    conversions: Arc<dyn ConversionRepository>,
}

impl QueryService {
    /// Creates a new query service.
    pub fn new(
        affiliates: Arc<dyn AffiliateRepository>,
        clicks: Arc<dyn ClickRepository>,
        conversions: Arc<dyn ConversionRepository>,
    ) -> Self {
        Self {
            affiliates,
            clicks,
            conversions,
        }
    }

    /// Lists all affiliates ordered by name.
    pub async fn list_affiliates(&self) -> Result<Vec<Affiliate>, AppError> {
        self.affiliates.list_all().await
    }

    /// Lists an affiliate's clicks, annotated with campaign names, newest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if `affiliate_id` is not positive.
    pub async fn list_clicks_for_affiliate(
        &self,
        affiliate_id: i64,
    ) -> Result<Vec<ClickWithCampaign>, AppError> {
        ensure_valid_affiliate_id(affiliate_id)?;
        self.clicks.list_for_affiliate(affiliate_id).await
    }

    /// Lists conversions attributed to an affiliate's clicks, annotated with
    /// the original click token and campaign name, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if `affiliate_id` is not positive.
    pub async fn list_conversions_for_affiliate(
        &self,
        affiliate_id: i64,
    ) -> Result<Vec<ConversionWithClick>, AppError> {
        ensure_valid_affiliate_id(affiliate_id)?;
        self.conversions.list_for_affiliate(affiliate_id).await
    }
}

fn ensure_valid_affiliate_id(affiliate_id: i64) -> Result<(), AppError> {
    if affiliate_id > 0 {
        Ok(())
    } else {
        Err(AppError::invalid_input("Invalid affiliate ID"))
    }
}
