use serde_json::json;
use shared_types::ClaimId;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_create_claim_starts_pending() {
    // GIVEN
    let context = TestContext::new().await;
    let (api, user) = context.register_user("Community User").await;

    // WHEN
    let resp = api.claims.create("Forest Plot A", "Maharashtra").await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["title"], "Forest Plot A");
    assert_eq!(resp["status"], "pending");
    assert_eq!(resp["area_hectares"], 2.5);
    assert_eq!(resp["location"]["lat"], 20.17);
    assert_eq!(resp["location"]["state"], "Maharashtra");
    assert_eq!(resp["user_id"], user["id"]);
    assert_eq!(resp["documents"], json!([]));
    assert!(resp["officer_notes"].is_null());
    assert!(resp["created_at"].is_string());
    assert!(resp["updated_at"].is_string());

    let id: ClaimId = serde_json::from_value(resp["id"].to_owned()).unwrap();
    let stored = context.db.claims.get(&id).await;
    assert_eq!(stored.title, "Forest Plot A");
    assert_eq!(stored.location.longitude, Some(80.02));
}

#[tokio::test]
async fn test_create_claim_missing_title() {
    // GIVEN
    let context = TestContext::new().await;
    let (api, _) = context.register_user("NGO").await;

    // WHEN
    let resp = api
        .claims
        .create_raw(json!({
            "title": "  ",
            "description": "Grazing land",
            "location": {},
        }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0004");
}

#[tokio::test]
async fn test_create_claim_invalid_coordinates() {
    // GIVEN
    let context = TestContext::new().await;
    let (api, _) = context.register_user("Community User").await;

    // WHEN
    let resp = api
        .claims
        .create_raw(json!({
            "title": "Forest Plot B",
            "description": "Grazing land",
            "location": { "lat": 95.0, "lng": 80.0 },
        }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_create_claim_without_token() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.claims.create("Forest Plot A", "Odisha").await;

    // THEN
    assert_eq!(resp.status(), 401);
}
