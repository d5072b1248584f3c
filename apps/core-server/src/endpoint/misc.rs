use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::build_info;
use crate::dto::error::{ErrorCode, ErrorResponseRestDTO};
use crate::metrics::encode_metrics;

#[derive(Clone, Debug, Serialize, ToSchema)]
pub(crate) struct ServiceStatusRestDTO {
    #[schema(example = "AI-Powered FRA Atlas & DSS API")]
    pub message: String,
    #[schema(example = "running")]
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "Ok", body = ServiceStatusRestDTO)
    ),
    tag = "other",
    summary = "Service status",
    description = "Returns the name and running state of the API.",
)]
pub(crate) async fn get_status() -> Json<ServiceStatusRestDTO> {
    Json(ServiceStatusRestDTO {
        message: "AI-Powered FRA Atlas & DSS API".to_string(),
        status: "running".to_string(),
    })
}

/// Fallback for `/api/*` paths without a route
pub(crate) async fn api_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponseRestDTO {
            code: ErrorCode::BR_0000,
            message: "API endpoint not found".to_string(),
            cause: None,
        }),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/build-info",
    responses(
        (status = 200, description = "Ok")
    ),
    tag = "other",
    summary = "Retrieve version",
    description = "Returns version information for FRA Atlas.",
)]
pub(crate) async fn get_build_info() -> Json<Value> {
    Json::from(json!({
        "version": String::from(build_info::PKG_VERSION),
        "target": String::from(build_info::BUILD_RUST_CHANNEL),
        "build_time": String::from(build_info::BUILD_TIME),
        "branch": String::from(build_info::BRANCH),
        "tag": String::from(build_info::TAG),
        "commit": String::from(build_info::COMMIT_HASH),
        "rust_version": String::from(build_info::RUST_VERSION),
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 204, description = "No content")
    ),
    tag = "other",
    summary = "Health check",
    description = "Returns a `204` response when the system is healthy.",
)]
pub(crate) async fn health_check() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "OK"),
        (status = 500, description = "Internal error")
    ),
    tag = "other",
    summary = "Retrieve metrics",
    description = "Returns system metrics.",
)]
pub(crate) async fn get_metrics() -> Response {
    match encode_metrics() {
        Ok(result) => (StatusCode::OK, result).into_response(),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Metrics encoding error: {:?}", error),
        )
            .into_response(),
    }
}
