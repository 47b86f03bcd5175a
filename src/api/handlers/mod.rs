//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod affiliates;
pub mod health;
pub mod tracking;

pub use affiliates::{
    affiliate_clicks_handler, affiliate_conversions_handler, affiliate_list_handler,
    affiliate_summary_handler,
};
pub use health::health_handler;
pub use tracking::{postback_handler, track_click_handler};
