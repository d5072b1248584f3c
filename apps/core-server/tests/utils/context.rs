use core_server::router::{ServerError, start_server};
use serde_json::Value;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::api_clients::Client;
use super::db_clients::DbClient;
use crate::fixtures::{self, TestingConfigParams};

pub const TEST_PASSWORD: &str = "s3cure-pass";

pub struct TestContext {
    pub db: DbClient,
    /// Client without credentials
    pub api: Client,
    pub upload_dir: TempDir,
    base_url: String,
    _handle: JoinHandle<Result<(), ServerError>>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::new_with_params(TestingConfigParams::default()).await
    }

    pub async fn new_with_params(params: TestingConfigParams) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let upload_dir = tempfile::tempdir().unwrap();
        let config = fixtures::create_config(upload_dir.path(), Some(params));
        let db = fixtures::create_db(&config).await;
        let _handle = tokio::spawn({
            let db = db.clone();
            async move { start_server(listener, config, db).await }
        });

        Self {
            db: DbClient::new(db),
            api: Client::new(base_url.to_owned(), None),
            upload_dir,
            base_url,
            _handle,
        }
    }

    pub fn client(&self, token: impl Into<String>) -> Client {
        Client::new(self.base_url.to_owned(), Some(token.into()))
    }

    /// Registers a fresh user and returns a client authenticated as them together with the user
    pub async fn register_user(&self, role: &str) -> (Client, Value) {
        let email = format!("{}@example.org", Uuid::new_v4());
        let resp = self.api.auth.register(&email, TEST_PASSWORD, role).await;
        assert_eq!(resp.status(), 200);

        let body = resp.json_value().await;
        let token = body["token"].as_str().unwrap();

        (self.client(token), body["user"].to_owned())
    }
}
