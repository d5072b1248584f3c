use fra_core::model::claim::ClaimStatus;
use fra_core::model::claim_history::ClaimHistoryAction;
use serde_json::Value;
use shared_types::ClaimId;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_claim_history_records_lifecycle() {
    // GIVEN
    let context = TestContext::new().await;
    let (community, _) = context.register_user("Community User").await;
    let (officer, officer_user) = context.register_user("District Officer").await;

    let claim = community
        .claims
        .create("Forest Plot A", "Maharashtra")
        .await
        .json_value()
        .await;
    let id: ClaimId = serde_json::from_value(claim["id"].to_owned()).unwrap();

    officer
        .claims
        .update_status(&id, "rejected", Some("Boundary dispute"))
        .await;

    // WHEN
    let resp = community.claims.history(&id).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp: Vec<Value> = resp.json().await;
    assert_eq!(resp.len(), 2);

    assert_eq!(resp[0]["action"], "created");
    assert_eq!(resp[0]["status"], "pending");
    assert!(resp[0]["previous_status"].is_null());

    assert_eq!(resp[1]["action"], "status_changed");
    assert_eq!(resp[1]["previous_status"], "pending");
    assert_eq!(resp[1]["status"], "rejected");
    assert_eq!(resp[1]["notes"], "Boundary dispute");
    assert_eq!(resp[1]["actor_id"], officer_user["id"]);

    let stored = context.db.claim_histories.list(&id).await;
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[1].action, ClaimHistoryAction::StatusChanged);
    assert_eq!(stored[1].status, ClaimStatus::Rejected);
}

#[tokio::test]
async fn test_claim_history_hidden_from_other_community_user() {
    // GIVEN
    let context = TestContext::new().await;
    let (owner, _) = context.register_user("Community User").await;
    let (stranger, _) = context.register_user("Community User").await;

    let claim = owner
        .claims
        .create("Forest Plot A", "Maharashtra")
        .await
        .json_value()
        .await;

    // WHEN
    let resp = stranger
        .claims
        .history(&claim["id"].as_str().unwrap())
        .await;

    // THEN
    assert_eq!(resp.status(), 403);
}
