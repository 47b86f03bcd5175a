//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, validation, and business rules. Services consume repository traits
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::tracking_service::TrackingService`] - Click registration and conversion attribution
//! - [`services::query_service::QueryService`] - Per-affiliate reporting reads

pub mod services;
