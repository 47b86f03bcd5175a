//! Handlers for the affiliate reporting endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use rust_decimal::Decimal;

use crate::api::dto::affiliates::{AffiliateDto, AffiliateSummary, ClickDto, ConversionDto};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all affiliates ordered by name.
///
/// # Endpoint
///
/// `GET /affiliates`
pub async fn affiliate_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AffiliateDto>>, AppError> {
    let affiliates = state.query_service.list_affiliates().await?;
    Ok(Json(affiliates.into_iter().map(Into::into).collect()))
}

/// Lists an affiliate's clicks, newest first.
///
/// # Endpoint
///
/// `GET /affiliates/{id}/clicks`
pub async fn affiliate_clicks_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ClickDto>>, AppError> {
    let affiliate_id = parse_affiliate_id(&id)?;
    let clicks = state
        .query_service
        .list_clicks_for_affiliate(affiliate_id)
        .await?;
    Ok(Json(clicks.into_iter().map(Into::into).collect()))
}

/// Lists conversions attributed to an affiliate's clicks, newest first.
///
/// # Endpoint
///
/// `GET /affiliates/{id}/conversions`
pub async fn affiliate_conversions_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ConversionDto>>, AppError> {
    let affiliate_id = parse_affiliate_id(&id)?;
    let conversions = state
        .query_service
        .list_conversions_for_affiliate(affiliate_id)
        .await?;
    Ok(Json(conversions.into_iter().map(Into::into).collect()))
}

/// Aggregated performance for one affiliate.
///
/// # Endpoint
///
/// `GET /affiliates/{id}/summary`
///
/// Computed here, in the consuming layer, from the query service's raw
/// lists: click count, conversion count, conversion rate
/// (conversions / clicks x 100, rounded to 2 decimals, 0 when there are no
/// clicks) and revenue (sum of conversion amounts).
pub async fn affiliate_summary_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AffiliateSummary>, AppError> {
    let affiliate_id = parse_affiliate_id(&id)?;

    let clicks = state
        .query_service
        .list_clicks_for_affiliate(affiliate_id)
        .await?;
    let conversions = state
        .query_service
        .list_conversions_for_affiliate(affiliate_id)
        .await?;

    let total_clicks = clicks.len() as i64;
    let total_conversions = conversions.len() as i64;

    let conversion_rate = if total_clicks > 0 {
        let rate = total_conversions as f64 / total_clicks as f64 * 100.0;
        (rate * 100.0).round() / 100.0
    } else {
        0.0
    };

    let total_revenue = conversions
        .iter()
        .fold(Decimal::ZERO, |acc, c| acc + c.amount);

    Ok(Json(AffiliateSummary {
        affiliate_id,
        total_clicks,
        total_conversions,
        conversion_rate,
        total_revenue,
    }))
}

fn parse_affiliate_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::invalid_input("Invalid affiliate ID"))
}
