use serde_json::Value;
use uuid::Uuid;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_list_claims_community_user_sees_own_only() {
    // GIVEN
    let context = TestContext::new().await;
    let (first, _) = context.register_user("Community User").await;
    let (second, _) = context.register_user("Community User").await;

    first.claims.create("Forest Plot A", "Odisha").await;
    first.claims.create("Forest Plot B", "Odisha").await;
    let other = second
        .claims
        .create("Forest Plot C", "Odisha")
        .await
        .json_value()
        .await;

    // WHEN
    let resp = first.claims.list().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp: Vec<Value> = resp.json().await;
    assert_eq!(resp.len(), 2);
    // newest first
    assert_eq!(resp[0]["title"], "Forest Plot B");
    assert_eq!(resp[1]["title"], "Forest Plot A");

    let resp = first.claims.get(&other["id"].as_str().unwrap()).await;
    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn test_list_claims_officer_sees_all() {
    // GIVEN
    let context = TestContext::new().await;
    let (first, _) = context.register_user("Community User").await;
    let (second, _) = context.register_user("NGO").await;
    let (officer, _) = context.register_user("District Officer").await;

    first.claims.create("Forest Plot A", "Odisha").await;
    second.claims.create("Forest Plot B", "Jharkhand").await;

    // WHEN
    let resp = officer.claims.list().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp: Vec<Value> = resp.json().await;
    assert_eq!(resp.len(), 2);
}

#[tokio::test]
async fn test_get_claim_not_found() {
    // GIVEN
    let context = TestContext::new().await;
    let (api, _) = context.register_user("Ministry").await;

    // WHEN
    let resp = api.claims.get(&Uuid::new_v4()).await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["code"], "BR_0002");
}

#[tokio::test]
async fn test_get_claim_malformed_id() {
    // GIVEN
    let context = TestContext::new().await;
    let (api, _) = context.register_user("Ministry").await;

    // WHEN
    let resp = api.claims.get(&"not-a-uuid").await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0084");
}
