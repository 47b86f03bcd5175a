//! Conversion entity representing an attributed transaction.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A completed transaction attributed to a prior [`super::Click`].
///
/// `click_id` references the internal click row, not the external token.
/// At most one conversion exists per click; the store enforces this with a
/// unique constraint. Conversions are never mutated or deleted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Conversion {
    pub id: i64,
    pub click_id: i64,
    pub amount: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for attributing a new conversion to an existing click.
#[derive(Debug, Clone)]
pub struct NewConversion {
    pub click_id: i64,
    pub amount: Decimal,
    pub currency: String,
}

/// A conversion annotated with the original click token and campaign name,
/// as served to the dashboard.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ConversionWithClick {
    pub id: i64,
    pub click_id: i64,
    pub amount: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub click_token: String,
    pub campaign_name: String,
}
