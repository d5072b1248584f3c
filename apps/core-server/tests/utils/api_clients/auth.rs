use serde_json::{Value, json};

use super::{HttpClient, Response};

pub struct AuthApi {
    client: HttpClient,
}

impl AuthApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn register(&self, email: &str, password: &str, role: &str) -> Response {
        let body = json!({
            "email": email,
            "password": password,
            "full_name": "Test User",
            "role": role,
        });

        self.client.post("/api/auth/register", body).await
    }

    pub async fn register_raw(&self, body: Value) -> Response {
        self.client.post("/api/auth/register", body).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        let body = json!({
            "email": email,
            "password": password,
        });

        self.client.post("/api/auth/login", body).await
    }

    pub async fn me(&self) -> Response {
        self.client.get("/api/auth/me").await
    }
}
