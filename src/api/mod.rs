//! HTTP layer for request/response handling.
//!
//! Translates HTTP requests into service operations and formats responses
//! in the postback wire format.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - Endpoint handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route tables

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
