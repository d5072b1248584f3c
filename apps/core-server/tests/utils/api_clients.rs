use std::sync::OnceLock;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;

use self::auth::AuthApi;
use self::claims::ClaimsApi;
use self::dashboard::DashboardApi;
use self::other::OtherApi;
use self::reports::ReportsApi;

pub mod auth;
pub mod claims;
pub mod other;
pub mod reports;

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| reqwest::ClientBuilder::new().build().unwrap())
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get(&self, url: &str) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = self
            .authorized(http_client().get(url))
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn post(&self, url: &str, body: impl Into<Option<Value>>) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = self
            .authorized(http_client().post(url))
            .json(&body.into())
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn put(&self, url: &str, body: impl Into<Option<Value>>) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = self
            .authorized(http_client().put(url))
            .json(&body.into())
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn post_multipart(&self, url: &str, form: reqwest::multipart::Form) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = self
            .authorized(http_client().post(url))
            .multipart(form)
            .send()
            .await
            .unwrap();

        Response { resp }
    }
}

pub struct Response {
    resp: reqwest::Response,
}

impl Response {
    pub fn status(&self) -> u16 {
        self.resp.status().into()
    }

    pub async fn text(self) -> String {
        self.resp.text().await.unwrap()
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        let full = self.resp.bytes().await.unwrap();
        serde_json::from_slice(&full).unwrap()
    }

    pub async fn json_value(self) -> Value {
        self.json().await
    }
}

pub struct Client {
    pub auth: AuthApi,
    pub claims: ClaimsApi,
    pub dashboard: DashboardApi,
    pub reports: ReportsApi,
    pub other: OtherApi,
}

impl Client {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        let client = HttpClient { base_url, token };

        Self {
            auth: AuthApi::new(client.clone()),
            claims: ClaimsApi::new(client.clone()),
            dashboard: DashboardApi::new(client.clone()),
            reports: ReportsApi::new(client.clone()),
            other: OtherApi::new(client),
        }
    }
}
