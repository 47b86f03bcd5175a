//! Business logic services for the application layer.

pub mod query_service;
pub mod tracking_service;

pub use query_service::QueryService;
pub use tracking_service::TrackingService;
