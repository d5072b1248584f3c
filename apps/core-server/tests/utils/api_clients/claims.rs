use std::fmt::Display;

use serde_json::{Value, json};

use super::{HttpClient, Response};

pub struct ClaimsApi {
    client: HttpClient,
}

impl ClaimsApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, title: &str, state: &str) -> Response {
        let body = json!({
            "title": title,
            "description": "Community forest resource claim",
            "location": {
                "lat": 20.17,
                "lng": 80.02,
                "state": state,
                "district": "Gadchiroli",
                "village": "Mendha",
            },
            "area_hectares": 2.5,
            "forest_type": "Dry deciduous",
        });

        self.client.post("/api/claims", body).await
    }

    pub async fn create_raw(&self, body: Value) -> Response {
        self.client.post("/api/claims", body).await
    }

    pub async fn list(&self) -> Response {
        self.client.get("/api/claims").await
    }

    pub async fn get(&self, id: &impl Display) -> Response {
        self.client.get(&format!("/api/claims/{id}")).await
    }

    pub async fn history(&self, id: &impl Display) -> Response {
        self.client.get(&format!("/api/claims/{id}/history")).await
    }

    pub async fn update_status(
        &self,
        id: &impl Display,
        status: &str,
        officer_notes: Option<&str>,
    ) -> Response {
        let body = json!({
            "status": status,
            "officer_notes": officer_notes,
        });

        self.client
            .put(&format!("/api/claims/{id}/status"), body)
            .await
    }

    pub async fn upload(
        &self,
        id: &impl Display,
        file_name: &str,
        content_type: &str,
        content: &[u8],
    ) -> Response {
        let part = reqwest::multipart::Part::bytes(content.to_vec())
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .unwrap();
        let form = reqwest::multipart::Form::new().part("file", part);

        self.client
            .post_multipart(&format!("/api/claims/{id}/upload"), form)
            .await
    }

    pub async fn upload_raw(&self, id: &impl Display, body: Value) -> Response {
        self.client
            .post(&format!("/api/claims/{id}/upload"), body)
            .await
    }
}
