//! Handlers for the tracking write path.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::api::dto::tracking::{PostbackParams, StatusResponse, TrackClickParams};
use crate::error::AppError;
use crate::state::AppState;

/// Registers an ad click.
///
/// # Endpoint
///
/// `GET /click?affiliate_id=1&campaign_id=2&click_id=abc123`
///
/// Registration is idempotent: repeating the same (affiliate, token) pair
/// succeeds without creating a second row.
///
/// # Errors
///
/// Returns 400 with the full list of violated rules if any parameter is
/// missing or malformed.
pub async fn track_click_handler(
    State(state): State<AppState>,
    Query(params): Query<TrackClickParams>,
) -> Result<Json<StatusResponse>, AppError> {
    state
        .tracking_service
        .register_click(
            params.affiliate_id.as_deref().unwrap_or(""),
            params.campaign_id.as_deref().unwrap_or(""),
            params.click_id.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(Json(StatusResponse::success("Click tracked")))
}

/// Records a conversion postback.
///
/// # Endpoint
///
/// `GET /postback?affiliate_id=1&click_id=abc123&amount=99.99&currency=USD`
///
/// # Errors
///
/// - 400 if validation fails or the click was never registered
/// - 409 if the click already has a conversion
pub async fn postback_handler(
    State(state): State<AppState>,
    Query(params): Query<PostbackParams>,
) -> Result<Json<StatusResponse>, AppError> {
    state
        .tracking_service
        .register_conversion(
            params.affiliate_id.as_deref().unwrap_or(""),
            params.click_id.as_deref().unwrap_or(""),
            params.amount.as_deref().unwrap_or(""),
            params.currency.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(Json(StatusResponse::success("Conversion tracked")))
}
