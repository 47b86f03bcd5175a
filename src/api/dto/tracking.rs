//! DTOs for the click and postback tracking endpoints.

use serde::{Deserialize, Serialize};

/// Raw query parameters of `GET /click`.
///
/// All fields arrive as strings (or not at all); validation and parsing
/// happen in the service so that missing and malformed parameters produce
/// the same accumulated error list.
#[derive(Debug, Deserialize)]
pub struct TrackClickParams {
    #[serde(default)]
    pub affiliate_id: Option<String>,
    #[serde(default)]
    pub campaign_id: Option<String>,
    #[serde(default)]
    pub click_id: Option<String>,
}

/// Raw query parameters of `GET /postback`.
#[derive(Debug, Deserialize)]
pub struct PostbackParams {
    #[serde(default)]
    pub affiliate_id: Option<String>,
    #[serde(default)]
    pub click_id: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Success acknowledgment in the postback wire format.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl StatusResponse {
    pub fn success(message: &'static str) -> Self {
        Self {
            status: "success",
            message,
        }
    }
}
