//! Click entity representing a single tracked ad click.

use chrono::{DateTime, Utc};

/// A recorded ad click.
///
/// `click_token` is the caller-supplied external identifier; it is unique per
/// affiliate, so re-registering the same token is a no-op. Clicks are never
/// mutated or deleted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Click {
    pub id: i64,
    pub affiliate_id: i64,
    pub campaign_id: i64,
    pub click_token: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for registering a new click.
///
/// The timestamp is assigned by the store on first insert and preserved on
/// duplicate registration.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub affiliate_id: i64,
    pub campaign_id: i64,
    pub click_token: String,
}

/// A click annotated with its campaign name, as served to the dashboard.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClickWithCampaign {
    pub id: i64,
    pub affiliate_id: i64,
    pub campaign_id: i64,
    pub campaign_name: String,
    pub click_token: String,
    pub created_at: DateTime<Utc>,
}
