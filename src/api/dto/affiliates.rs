//! DTOs for the affiliate reporting endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entities::{Affiliate, ClickWithCampaign, ConversionWithClick};

/// An affiliate as served to the dashboard.
#[derive(Debug, Serialize)]
pub struct AffiliateDto {
    pub id: i64,
    pub name: String,
}

impl From<Affiliate> for AffiliateDto {
    fn from(a: Affiliate) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}

/// A click annotated with its campaign name.
///
/// `click_id` carries the external click token, matching the tracking
/// endpoints' parameter naming.
#[derive(Debug, Serialize)]
pub struct ClickDto {
    pub id: i64,
    pub affiliate_id: i64,
    pub campaign_id: i64,
    pub campaign_name: String,
    pub click_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<ClickWithCampaign> for ClickDto {
    fn from(c: ClickWithCampaign) -> Self {
        Self {
            id: c.id,
            affiliate_id: c.affiliate_id,
            campaign_id: c.campaign_id,
            campaign_name: c.campaign_name,
            click_id: c.click_token,
            created_at: c.created_at,
        }
    }
}

/// A conversion annotated with the original click token and campaign name.
#[derive(Debug, Serialize)]
pub struct ConversionDto {
    pub id: i64,
    pub click_id: i64,
    pub amount: Decimal,
    pub currency: String,
    pub original_click_id: String,
    pub campaign_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<ConversionWithClick> for ConversionDto {
    fn from(c: ConversionWithClick) -> Self {
        Self {
            id: c.id,
            click_id: c.click_id,
            amount: c.amount,
            currency: c.currency,
            original_click_id: c.click_token,
            campaign_name: c.campaign_name,
            created_at: c.created_at,
        }
    }
}

/// Aggregated per-affiliate performance for the dashboard.
#[derive(Debug, Serialize)]
pub struct AffiliateSummary {
    pub affiliate_id: i64,
    pub total_clicks: i64,
    pub total_conversions: i64,
    /// Conversions per click as a percentage, rounded to 2 decimals;
    /// 0 when there are no clicks.
    pub conversion_rate: f64,
    pub total_revenue: Decimal,
}
