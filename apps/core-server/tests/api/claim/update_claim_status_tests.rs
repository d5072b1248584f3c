use fra_core::model::claim::ClaimStatus;
use shared_types::ClaimId;
use uuid::Uuid;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_officer_approves_claim() {
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
    assert_eq!(claim["status"], "pending");
    let id: ClaimId = serde_json::from_value(claim["id"].to_owned()).unwrap();

    // WHEN
    let resp = officer
        .claims
        .update_status(&id, "approved", Some("Verified documents"))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["status"], "approved");
    assert_eq!(resp["officer_notes"], "Verified documents");
    assert_eq!(resp["reviewed_by"], officer_user["id"]);

    let stored = context.db.claims.get(&id).await;
    assert_eq!(stored.status, ClaimStatus::Approved);
    assert_eq!(stored.officer_notes.as_deref(), Some("Verified documents"));
    assert!(stored.last_modified >= stored.created_date);

    // owner sees the decision
    let resp = community.claims.get(&id).await.json_value().await;
    assert_eq!(resp["status"], "approved");
}

#[tokio::test]
async fn test_community_user_cannot_change_status() {
    // GIVEN
    let context = TestContext::new().await;
    let (community, _) = context.register_user("Community User").await;
    let claim = community
        .claims
        .create("Forest Plot A", "Maharashtra")
        .await
        .json_value()
        .await;
    let id: ClaimId = serde_json::from_value(claim["id"].to_owned()).unwrap();

    // WHEN
    let resp = community.claims.update_status(&id, "approved", None).await;

    // THEN
    assert_eq!(resp.status(), 403);
    assert_eq!(resp.json_value().await["code"], "BR_0005");
    assert_eq!(context.db.claims.get(&id).await.status, ClaimStatus::Pending);
}

#[tokio::test]
async fn test_ngo_cannot_change_status() {
    // GIVEN
    let context = TestContext::new().await;
    let (ngo, _) = context.register_user("NGO").await;
    let claim = ngo
        .claims
        .create("Forest Plot A", "Odisha")
        .await
        .json_value()
        .await;
    let id: ClaimId = serde_json::from_value(claim["id"].to_owned()).unwrap();

    // WHEN
    let resp = ngo.claims.update_status(&id, "rejected", None).await;

    // THEN
    assert_eq!(resp.status(), 403);
    assert_eq!(context.db.claims.get(&id).await.status, ClaimStatus::Pending);
}

#[tokio::test]
async fn test_update_status_invalid_value() {
    // GIVEN
    let context = TestContext::new().await;
    let (ministry, _) = context.register_user("Ministry").await;
    let claim = ministry
        .claims
        .create("Forest Plot A", "Odisha")
        .await
        .json_value()
        .await;
    let id: ClaimId = serde_json::from_value(claim["id"].to_owned()).unwrap();

    // WHEN
    let resp = ministry.claims.update_status(&id, "archived", None).await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0003");
    assert_eq!(context.db.claims.get(&id).await.status, ClaimStatus::Pending);
}

#[tokio::test]
async fn test_update_status_twice_keeps_latest_notes() {
    // GIVEN
    let context = TestContext::new().await;
    let (ministry, _) = context.register_user("Ministry").await;
    let claim = ministry
        .claims
        .create("Forest Plot A", "Odisha")
        .await
        .json_value()
        .await;
    let id: ClaimId = serde_json::from_value(claim["id"].to_owned()).unwrap();

    // WHEN
    ministry
        .claims
        .update_status(&id, "under_review", Some("Field visit planned"))
        .await;
    let resp = ministry
        .claims
        .update_status(&id, "under_review", Some("Field visit done"))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let stored = context.db.claims.get(&id).await;
    assert_eq!(stored.status, ClaimStatus::UnderReview);
    assert_eq!(stored.officer_notes.as_deref(), Some("Field visit done"));
}

#[tokio::test]
async fn test_update_status_unknown_claim() {
    // GIVEN
    let context = TestContext::new().await;
    let (officer, _) = context.register_user("District Officer").await;

    // WHEN
    let resp = officer
        .claims
        .update_status(&Uuid::new_v4(), "approved", None)
        .await;

    // THEN
    assert_eq!(resp.status(), 404);
}
