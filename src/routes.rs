//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /click`        - Register a click (idempotent)
//! - `GET /postback`     - Record a conversion postback
//! - `GET /health`       - Liveness probe
//! - `GET /affiliates/*` - Reporting endpoints for the dashboard
//! - anything else       - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - per-request span with status and latency
//! - **CORS** - permissive, so the dashboard frontend can call the API
//!   directly (the service carries no credentials)

use crate::api;
use crate::api::handlers::{health_handler, postback_handler, track_click_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/click", get(track_click_handler))
        .route("/postback", get(postback_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::affiliate_routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
        .layer(CorsLayer::permissive())
}

async fn not_found_handler() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "status": "error", "message": "Endpoint not found" })),
    )
}
