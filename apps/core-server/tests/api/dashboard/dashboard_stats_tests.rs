use serde_json::json;
use shared_types::ClaimId;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::fixtures::TestingConfigParams;
use crate::utils::api_clients::Client;
use crate::utils::context::TestContext;

async fn create_claim(api: &Client, title: &str) -> ClaimId {
    let claim = api
        .claims
        .create(title, "Odisha")
        .await
        .json_value()
        .await;
    serde_json::from_value(claim["id"].to_owned()).unwrap()
}

#[tokio::test]
async fn test_dashboard_stats_empty() {
    // GIVEN
    let context = TestContext::new().await;
    let (api, _) = context.register_user("Ministry").await;

    // WHEN
    let resp = api.dashboard.stats().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["statistics"]["total_claims"], 0);
    assert_eq!(resp["statistics"]["approval_rate"], 0.0);
    assert!(resp.get("ai_insights").is_none());
    assert!(resp["last_updated"].is_string());
}

#[tokio::test]
async fn test_dashboard_stats_counts() {
    // GIVEN
    let context = TestContext::new().await;
    let (community, _) = context.register_user("Community User").await;
    let (officer, _) = context.register_user("District Officer").await;

    let first = create_claim(&community, "Forest Plot A").await;
    let second = create_claim(&community, "Forest Plot B").await;
    create_claim(&community, "Forest Plot C").await;
    let fourth = create_claim(&community, "Forest Plot D").await;

    officer.claims.update_status(&first, "approved", None).await;
    officer.claims.update_status(&second, "rejected", None).await;
    officer.claims.update_status(&fourth, "under_review", None).await;

    // WHEN
    let resp = officer.dashboard.stats().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let statistics = resp.json_value().await["statistics"].to_owned();
    assert_eq!(
        statistics,
        json!({
            "total_claims": 4,
            "pending_claims": 1,
            "under_review_claims": 1,
            "approved_claims": 1,
            "rejected_claims": 1,
            "approval_rate": 0.25,
        })
    );
}

#[tokio::test]
async fn test_dashboard_stats_limited_to_own_claims() {
    // GIVEN
    let context = TestContext::new().await;
    let (first, _) = context.register_user("Community User").await;
    let (second, _) = context.register_user("Community User").await;

    create_claim(&first, "Forest Plot A").await;
    create_claim(&second, "Forest Plot B").await;
    create_claim(&second, "Forest Plot C").await;

    // WHEN
    let resp = first.dashboard.stats().await;

    // THEN
    assert_eq!(resp.json_value().await["statistics"]["total_claims"], 1);
}

#[tokio::test]
async fn test_dashboard_stats_with_insights() {
    // GIVEN
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Most claims are pending" }] } }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let context = TestContext::new_with_params(TestingConfigParams {
        insight_url: Some(mock_server.uri()),
        ..Default::default()
    })
    .await;
    let (api, _) = context.register_user("Ministry").await;
    create_claim(&api, "Forest Plot A").await;

    // WHEN
    let resp = api.dashboard.stats().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["ai_insights"], "Most claims are pending");
    assert_eq!(resp["statistics"]["total_claims"], 1);
}

#[tokio::test]
async fn test_dashboard_stats_insight_failure() {
    // GIVEN
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("quota exceeded"))
        .mount(&mock_server)
        .await;

    let context = TestContext::new_with_params(TestingConfigParams {
        insight_url: Some(mock_server.uri()),
        ..Default::default()
    })
    .await;
    let (api, _) = context.register_user("District Officer").await;
    create_claim(&api, "Forest Plot A").await;

    // WHEN
    let resp = api.dashboard.stats().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert!(resp.get("ai_insights").is_none());
    assert_eq!(resp["statistics"]["total_claims"], 1);
}
