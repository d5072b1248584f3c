use serde_json::{Value, json};
use shared_types::ClaimId;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_summary_report_groups_by_state() {
    // GIVEN
    let context = TestContext::new().await;
    let (community, _) = context.register_user("Community User").await;
    let (ministry, _) = context.register_user("Ministry").await;

    let approved = community
        .claims
        .create("Forest Plot A", "Odisha")
        .await
        .json_value()
        .await;
    let approved: ClaimId = serde_json::from_value(approved["id"].to_owned()).unwrap();
    community.claims.create("Forest Plot B", "Odisha").await;
    community.claims.create("Forest Plot C", "Jharkhand").await;
    community
        .claims
        .create_raw(json!({
            "title": "Forest Plot D",
            "description": "Region unknown",
            "location": {},
        }))
        .await;

    ministry.claims.update_status(&approved, "approved", None).await;

    // WHEN
    let resp = ministry.reports.summary().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["report_type"], "summary");
    assert!(resp["generated_at"].is_string());

    let data: Vec<Value> = serde_json::from_value(resp["data"].to_owned()).unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(
        data,
        vec![
            json!({ "state": null, "total_claims": 1, "approved": 0, "pending": 1, "under_review": 0, "rejected": 0 }),
            json!({ "state": "Jharkhand", "total_claims": 1, "approved": 0, "pending": 1, "under_review": 0, "rejected": 0 }),
            json!({ "state": "Odisha", "total_claims": 2, "approved": 1, "pending": 1, "under_review": 0, "rejected": 0 }),
        ]
    );
}

#[tokio::test]
async fn test_summary_report_community_user_scope() {
    // GIVEN
    let context = TestContext::new().await;
    let (first, _) = context.register_user("Community User").await;
    let (second, _) = context.register_user("Community User").await;

    first.claims.create("Forest Plot A", "Odisha").await;
    second.claims.create("Forest Plot B", "Jharkhand").await;

    // WHEN
    let resp = first.reports.summary().await.json_value().await;

    // THEN
    assert_eq!(resp["data"].as_array().unwrap().len(), 1);
    assert_eq!(resp["data"][0]["state"], "Odisha");
}
