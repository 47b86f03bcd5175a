//! Pure parameter validation for the tracking endpoints.
//!
//! Every rule is checked independently and all violations are reported
//! together; messages use the wire-level parameter names (`affiliate_id`,
//! `campaign_id`, `click_id`, `amount`, `currency`). On success the parsed,
//! typed parameters are returned so callers never re-parse raw input.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Maximum accepted length of the external click token.
pub const MAX_CLICK_TOKEN_LENGTH: usize = 100;

/// Currency codes accepted in postbacks.
pub const SUPPORTED_CURRENCIES: [&str; 6] = ["USD", "EUR", "GBP", "CAD", "AUD", "JPY"];

/// Validated parameters of a click registration.
#[derive(Debug, Clone)]
pub struct ClickParams {
    pub affiliate_id: i64,
    pub campaign_id: i64,
    pub click_token: String,
}

/// Validated parameters of a conversion postback.
///
/// `currency` is normalized to uppercase.
#[derive(Debug, Clone)]
pub struct PostbackParams {
    pub affiliate_id: i64,
    pub click_token: String,
    pub amount: Decimal,
    pub currency: String,
}

/// Validates click registration parameters.
///
/// Rules:
/// - `affiliate_id`, `campaign_id`: must parse as a positive integer
/// - `click_id`: non-empty after trimming, at most
///   [`MAX_CLICK_TOKEN_LENGTH`] characters (untrimmed)
pub fn validate_click_params(
    affiliate_id: &str,
    campaign_id: &str,
    click_id: &str,
) -> Result<ClickParams, Vec<String>> {
    let mut errors = Vec::new();

    let affiliate_id = check_positive_id(affiliate_id, "affiliate_id", &mut errors);
    let campaign_id = check_positive_id(campaign_id, "campaign_id", &mut errors);
    let click_token = check_click_token(click_id, &mut errors);

    match (affiliate_id, campaign_id, click_token) {
        (Some(affiliate_id), Some(campaign_id), Some(click_token)) => Ok(ClickParams {
            affiliate_id,
            campaign_id,
            click_token,
        }),
        _ => Err(errors),
    }
}

/// Validates conversion postback parameters.
///
/// Rules:
/// - `affiliate_id`, `click_id`: as in [`validate_click_params`]
/// - `amount`: must parse as a decimal number >= 0.01
/// - `currency`: exactly 3 characters, case-insensitively one of
///   [`SUPPORTED_CURRENCIES`]; no trimming, so `" USD"` is rejected
pub fn validate_postback_params(
    affiliate_id: &str,
    click_id: &str,
    amount: &str,
    currency: &str,
) -> Result<PostbackParams, Vec<String>> {
    let mut errors = Vec::new();

    let affiliate_id = check_positive_id(affiliate_id, "affiliate_id", &mut errors);
    let click_token = check_click_token(click_id, &mut errors);
    let amount = check_amount(amount, &mut errors);
    let currency = check_currency(currency, &mut errors);

    match (affiliate_id, click_token, amount, currency) {
        (Some(affiliate_id), Some(click_token), Some(amount), Some(currency)) => {
            Ok(PostbackParams {
                affiliate_id,
                click_token,
                amount,
                currency,
            })
        }
        _ => Err(errors),
    }
}

fn check_positive_id(raw: &str, field: &str, errors: &mut Vec<String>) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.push(format!("{field} must be a positive number"));
            None
        }
    }
}

fn check_click_token(raw: &str, errors: &mut Vec<String>) -> Option<String> {
    if raw.trim().is_empty() {
        errors.push("click_id must be a non-empty string".to_string());
        None
    } else if raw.chars().count() > MAX_CLICK_TOKEN_LENGTH {
        errors.push(format!(
            "click_id must be less than {MAX_CLICK_TOKEN_LENGTH} characters"
        ));
        None
    } else {
        Some(raw.to_string())
    }
}

fn check_amount(raw: &str, errors: &mut Vec<String>) -> Option<Decimal> {
    let min = Decimal::new(1, 2); // 0.01
    match Decimal::from_str(raw.trim()) {
        Ok(amount) if amount >= min => Some(amount),
        _ => {
            errors.push("amount must be a number greater than or equal to 0.01".to_string());
            None
        }
    }
}

fn check_currency(raw: &str, errors: &mut Vec<String>) -> Option<String> {
    if raw.chars().count() != 3 {
        errors.push("currency must be a 3-letter currency code (e.g., USD)".to_string());
        return None;
    }

    let upper = raw.to_uppercase();
    if SUPPORTED_CURRENCIES.contains(&upper.as_str()) {
        Some(upper)
    } else {
        errors.push(format!(
            "currency must be one of: {}",
            SUPPORTED_CURRENCIES.join(", ")
        ));
        None
    }
}
