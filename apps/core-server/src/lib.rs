use std::net::IpAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub mod dto;
pub mod endpoint;
pub mod metrics;
pub mod router;
pub mod serialize;
pub mod build_info {
    use shadow_rs::shadow;

    shadow!(build);

    pub use build::*;
}
mod middleware;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub database_url: String,
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    pub trace_json: Option<bool>,
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    pub trace_level: Option<String>,
    // when set to true hides the `cause` field in the error response
    pub hide_error_response_cause: bool,
    /// whether endpoint metrics are available
    pub enable_metrics: bool,
    /// whether build-info and health endpoints are available
    pub enable_server_info: bool,
    /// whether swagger and openapi endpoints are available
    pub enable_open_api: bool,
    /// prebuilt frontend served for all non-API paths
    pub frontend_dir: Option<PathBuf>,
    /// target directory of uploaded claim documents
    pub upload_dir: PathBuf,
    /// upper bound of an uploaded document in bytes
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://fra_atlas.db?mode=rwc".to_string(),
            server_ip: None,
            server_port: None,
            trace_json: None,
            sentry_dsn: None,
            sentry_environment: None,
            trace_level: None,
            hide_error_response_cause: false,
            enable_metrics: true,
            enable_server_info: true,
            enable_open_api: true,
            frontend_dir: None,
            upload_dir: PathBuf::from("uploads"),
            max_upload_size: 20 * 1024 * 1024,
        }
    }
}
