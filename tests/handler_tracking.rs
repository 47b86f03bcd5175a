mod common;

use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_track_click_success() {
    let (server, store) = common::test_server();

    let response = server
        .get("/click?affiliate_id=1&campaign_id=2&click_id=abc123")
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Click tracked");
    assert_eq!(store.click_count(), 1);
}

#[tokio::test]
async fn test_track_click_is_idempotent() {
    let (server, store) = common::test_server();

    for _ in 0..2 {
        let response = server
            .get("/click?affiliate_id=1&campaign_id=2&click_id=abc123")
            .await;
        response.assert_status(StatusCode::OK);
    }

    assert_eq!(store.click_count(), 1);
}

#[tokio::test]
async fn test_track_click_reports_all_violations() {
    let (server, _store) = common::test_server();

    let response = server.get("/click?affiliate_id=0&campaign_id=-3&click_id=").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Validation failed");

    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);
    assert!(errors.contains(&Value::from("affiliate_id must be a positive number")));
    assert!(errors.contains(&Value::from("campaign_id must be a positive number")));
    assert!(errors.contains(&Value::from("click_id must be a non-empty string")));
}

#[tokio::test]
async fn test_track_click_missing_params_fail_validation() {
    let (server, _store) = common::test_server();

    let response = server.get("/click").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["errors"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_track_click_rejects_overlong_token() {
    let (server, _store) = common::test_server();

    let token = "x".repeat(101);
    let response = server
        .get(&format!("/click?affiliate_id=1&campaign_id=2&click_id={token}"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["errors"]
        .as_array()
        .unwrap()
        .contains(&Value::from("click_id must be less than 100 characters")));
}

#[tokio::test]
async fn test_track_click_unknown_affiliate_rejected() {
    // Well-formed parameters for an affiliate that was never provisioned:
    // the foreign key rejects the insert and the caller gets a 400.
    let (server, store) = common::test_server();

    let response = server
        .get("/click?affiliate_id=999&campaign_id=1&click_id=abc123")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Invalid reference - related record not found");
    assert_eq!(store.click_count(), 0);
}

#[tokio::test]
async fn test_track_click_unknown_campaign_rejected() {
    let (server, store) = common::test_server();

    let response = server
        .get("/click?affiliate_id=1&campaign_id=999&click_id=abc123")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid reference - related record not found");
    assert_eq!(store.click_count(), 0);
}

#[tokio::test]
async fn test_postback_requires_known_click() {
    let (server, store) = common::test_server();

    let response = server
        .get("/postback?affiliate_id=1&click_id=never_seen&amount=99.99&currency=USD")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Invalid click");
    assert_eq!(store.conversion_count(), 0);
}

#[tokio::test]
async fn test_postback_invalid_click_regardless_of_valid_money() {
    // A perfectly valid amount/currency still fails when the token is unknown.
    let (server, _store) = common::test_server();

    let response = server
        .get("/postback?affiliate_id=3&click_id=ghost&amount=0.01&currency=jpy")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid click");
}

#[tokio::test]
async fn test_postback_end_to_end_with_duplicate_rejection() {
    let (server, store) = common::test_server();

    server
        .get("/click?affiliate_id=1&campaign_id=2&click_id=abc123")
        .await
        .assert_status(StatusCode::OK);

    let response = server
        .get("/postback?affiliate_id=1&click_id=abc123&amount=99.99&currency=USD")
        .await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Conversion tracked");
    assert_eq!(store.conversion_count(), 1);

    // Retrying the same postback must not create or overwrite anything.
    let response = server
        .get("/postback?affiliate_id=1&click_id=abc123&amount=10.00&currency=EUR")
        .await;
    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Conversion already tracked for this click");
    assert_eq!(store.conversion_count(), 1);

    // The stored conversion is the original one.
    let response = server.get("/affiliates/1/conversions").await;
    response.assert_status(StatusCode::OK);
    let conversions: Value = response.json();
    let conversions = conversions.as_array().unwrap();
    assert_eq!(conversions.len(), 1);
    assert_eq!(conversions[0]["original_click_id"], "abc123");
    assert_eq!(conversions[0]["amount"], "99.99");
    assert_eq!(conversions[0]["currency"], "USD");
}

#[tokio::test]
async fn test_postback_validation_rules() {
    let (server, _store) = common::test_server();

    server
        .get("/click?affiliate_id=1&campaign_id=1&click_id=tok1")
        .await
        .assert_status(StatusCode::OK);

    // Lowercase currency is accepted and stored uppercased.
    let response = server
        .get("/postback?affiliate_id=1&click_id=tok1&amount=0.01&currency=usd")
        .await;
    response.assert_status(StatusCode::OK);

    let response = server.get("/affiliates/1/conversions").await;
    let conversions: Value = response.json();
    assert_eq!(conversions[0]["currency"], "USD");
    assert_eq!(conversions[0]["amount"], "0.01");

    // Untrimmed currency fails the exact-length rule.
    let response = server
        .get("/postback?affiliate_id=1&click_id=tok1&amount=1.00&currency=%20USD")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["errors"]
        .as_array()
        .unwrap()
        .contains(&Value::from("currency must be a 3-letter currency code (e.g., USD)")));

    // Unsupported code of the right length.
    let response = server
        .get("/postback?affiliate_id=1&click_id=tok1&amount=1.00&currency=XXX")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Zero and negative amounts.
    for amount in ["0.00", "-5"] {
        let response = server
            .get(&format!(
                "/postback?affiliate_id=1&click_id=tok1&amount={amount}&currency=USD"
            ))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["errors"]
            .as_array()
            .unwrap()
            .contains(&Value::from(
                "amount must be a number greater than or equal to 0.01"
            )));
    }

    // Everything missing: every rule is reported.
    let response = server.get("/postback").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["errors"].as_array().unwrap().len(), 4);
}
