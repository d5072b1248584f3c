use super::{HttpClient, Response};

pub struct ReportsApi {
    client: HttpClient,
}

impl ReportsApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn summary(&self) -> Response {
        self.client.get("/api/reports/summary").await
    }
}
