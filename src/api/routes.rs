//! API route configuration for the affiliate reporting endpoints.

use crate::api::handlers::{
    affiliate_clicks_handler, affiliate_conversions_handler, affiliate_list_handler,
    affiliate_summary_handler,
};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Reporting routes consumed by the dashboard.
///
/// # Endpoints
///
/// - `GET /affiliates`                    - List affiliates ordered by name
/// - `GET /affiliates/{id}/clicks`        - Clicks annotated with campaign name
/// - `GET /affiliates/{id}/conversions`   - Conversions annotated with token and campaign
/// - `GET /affiliates/{id}/summary`       - Aggregated performance figures
pub fn affiliate_routes() -> Router<AppState> {
    Router::new()
        .route("/affiliates", get(affiliate_list_handler))
        .route("/affiliates/{id}/clicks", get(affiliate_clicks_handler))
        .route(
            "/affiliates/{id}/conversions",
            get(affiliate_conversions_handler),
        )
        .route("/affiliates/{id}/summary", get(affiliate_summary_handler))
}
