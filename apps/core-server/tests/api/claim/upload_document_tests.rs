use serde_json::json;
use shared_types::ClaimId;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::fixtures::TestingConfigParams;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_upload_document_without_insights() {
    // GIVEN
    let context = TestContext::new().await;
    let (api, _) = context.register_user("Community User").await;
    let claim = api
        .claims
        .create("Forest Plot A", "Maharashtra")
        .await
        .json_value()
        .await;
    let id: ClaimId = serde_json::from_value(claim["id"].to_owned()).unwrap();

    // WHEN
    let resp = api
        .claims
        .upload(&id, "gram_sabha_resolution.pdf", "application/pdf", b"%PDF-1.4")
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["message"], "Document uploaded and analyzed successfully");
    assert!(resp["ai_analysis"].is_null());

    let file_path = resp["file_path"].as_str().unwrap();
    assert!(file_path.ends_with(&format!("{id}_gram_sabha_resolution.pdf")));
    assert!(file_path.starts_with(context.upload_dir.path().to_str().unwrap()));
    assert_eq!(std::fs::read(file_path).unwrap(), b"%PDF-1.4");

    let stored = context.db.claims.get(&id).await;
    assert_eq!(stored.documents, vec![file_path.to_string()]);
    assert!(stored.ai_analysis.is_none());

    let history = context.db.claim_histories.list(&id).await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].notes.as_deref(), Some("gram_sabha_resolution.pdf"));
}

#[tokio::test]
async fn test_upload_same_document_twice_listed_once() {
    // GIVEN
    let context = TestContext::new().await;
    let (api, _) = context.register_user("Community User").await;
    let claim = api
        .claims
        .create("Forest Plot A", "Maharashtra")
        .await
        .json_value()
        .await;
    let id: ClaimId = serde_json::from_value(claim["id"].to_owned()).unwrap();

    // WHEN
    let first = api
        .claims
        .upload(&id, "patta.pdf", "application/pdf", b"first scan")
        .await;
    let second = api
        .claims
        .upload(&id, "patta.pdf", "application/pdf", b"second scan")
        .await;

    // THEN
    assert_eq!(first.status(), 200);
    assert_eq!(second.status(), 200);
    let file_path = second.json_value().await["file_path"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(std::fs::read(&file_path).unwrap(), b"second scan");

    let stored = context.db.claims.get(&id).await;
    assert_eq!(stored.documents, vec![file_path]);

    let history = context.db.claim_histories.list(&id).await;
    assert_eq!(history.len(), 3);
}

#[tokio::test]
async fn test_upload_document_with_analysis() {
    // GIVEN
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"document_type\": \"land record\"}" }] }
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let context = TestContext::new_with_params(TestingConfigParams {
        insight_url: Some(mock_server.uri()),
        ..Default::default()
    })
    .await;
    let (api, _) = context.register_user("NGO").await;
    let claim = api
        .claims
        .create("Forest Plot A", "Maharashtra")
        .await
        .json_value()
        .await;
    let id: ClaimId = serde_json::from_value(claim["id"].to_owned()).unwrap();

    // WHEN
    let resp = api
        .claims
        .upload(&id, "map.png", "image/png", b"\x89PNG")
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let resp = resp.json_value().await;
    assert_eq!(resp["ai_analysis"], "{\"document_type\": \"land record\"}");

    let stored = context.db.claims.get(&id).await;
    assert_eq!(
        stored.ai_analysis.as_deref(),
        Some("{\"document_type\": \"land record\"}")
    );
}

#[tokio::test]
async fn test_upload_document_analysis_failure_still_stores() {
    // GIVEN
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let context = TestContext::new_with_params(TestingConfigParams {
        insight_url: Some(mock_server.uri()),
        ..Default::default()
    })
    .await;
    let (api, _) = context.register_user("Community User").await;
    let claim = api
        .claims
        .create("Forest Plot A", "Odisha")
        .await
        .json_value()
        .await;
    let id: ClaimId = serde_json::from_value(claim["id"].to_owned()).unwrap();

    // WHEN
    let resp = api
        .claims
        .upload(&id, "deed.pdf", "application/pdf", b"%PDF")
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert!(resp.json_value().await["ai_analysis"].is_null());
    assert_eq!(context.db.claims.get(&id).await.documents.len(), 1);
}

#[tokio::test]
async fn test_upload_empty_document() {
    // GIVEN
    let context = TestContext::new().await;
    let (api, _) = context.register_user("Community User").await;
    let claim = api
        .claims
        .create("Forest Plot A", "Odisha")
        .await
        .json_value()
        .await;
    let id: ClaimId = serde_json::from_value(claim["id"].to_owned()).unwrap();

    // WHEN
    let resp = api
        .claims
        .upload(&id, "deed.pdf", "application/pdf", b"")
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0008");
    assert!(context.db.claims.get(&id).await.documents.is_empty());
}

#[tokio::test]
async fn test_upload_without_multipart_body() {
    // GIVEN
    let context = TestContext::new().await;
    let (api, _) = context.register_user("Community User").await;
    let claim = api
        .claims
        .create("Forest Plot A", "Odisha")
        .await
        .json_value()
        .await;
    let id: ClaimId = serde_json::from_value(claim["id"].to_owned()).unwrap();

    // WHEN
    let resp = api
        .claims
        .upload_raw(&id, json!({ "file": "deed.pdf" }))
        .await;

    // THEN
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.json_value().await["code"], "BR_0084");
    assert!(context.db.claims.get(&id).await.documents.is_empty());
}

#[tokio::test]
async fn test_upload_to_foreign_claim() {
    // GIVEN
    let context = TestContext::new().await;
    let (owner, _) = context.register_user("Community User").await;
    let (stranger, _) = context.register_user("Community User").await;
    let claim = owner
        .claims
        .create("Forest Plot A", "Odisha")
        .await
        .json_value()
        .await;
    let id: ClaimId = serde_json::from_value(claim["id"].to_owned()).unwrap();

    // WHEN
    let resp = stranger
        .claims
        .upload(&id, "deed.pdf", "application/pdf", b"%PDF")
        .await;

    // THEN
    assert_eq!(resp.status(), 403);
    assert!(context.db.claims.get(&id).await.documents.is_empty());
}
