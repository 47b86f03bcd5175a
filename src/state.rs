//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{QueryService, TrackingService};

/// Handles to the application services.
///
/// Built once at startup from concrete PostgreSQL repositories, or from
/// in-memory repositories in tests; handlers never see the store directly.
#[derive(Clone)]
pub struct AppState {
    pub tracking_service: Arc<TrackingService>,
    pub query_service: Arc<QueryService>,
}

impl AppState {
    /// Creates application state from service handles.
    pub fn new(tracking_service: Arc<TrackingService>, query_service: Arc<QueryService>) -> Self {
        Self {
            tracking_service,
            query_service,
        }
    }
}
