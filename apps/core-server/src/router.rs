#![cfg_attr(feature = "strict", deny(warnings))]

use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{Request, Response};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{any, get, post, put};
use fra_core::config::core_config::AppConfig;
use fra_core::provider::document_storage::FilesystemDocumentStorage;
use fra_core::{FraCore, FraCoreBuildError};
use sql_data_provider::{DataLayer, DbConn};
use thiserror::Error;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::dto::response::ErrorResponse;
use crate::endpoint::{self, auth, claim, dashboard, misc, report};
use crate::middleware::get_http_request_context;
use crate::{ServerConfig, build_info, dto};

pub(crate) struct InternalAppState {
    pub core: FraCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Core initialization failed: `{0}`")]
    Core(#[from] FraCoreBuildError),
    #[error("Server IO error: `{0}`")]
    Io(#[from] std::io::Error),
}

pub async fn start_server(
    listener: TcpListener,
    config: AppConfig<ServerConfig>,
    db_conn: DbConn,
) -> Result<(), ServerError> {
    listener.set_nonblocking(true)?;

    let document_storage = Arc::new(FilesystemDocumentStorage::new(
        config.app.upload_dir.to_owned(),
    ));

    let core = FraCore::new(
        Arc::new(DataLayer::build(db_conn)),
        config.core,
        document_storage,
    )?;

    let config = Arc::new(config.app);
    let state: AppState = Arc::new(InternalAppState {
        core,
        config: config.to_owned(),
    });

    let addr = listener.local_addr()?;
    info!("Starting server at http://{addr}");

    let router = router(state, config);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)?,
        router.into_make_service(),
    )
    .await?;

    Ok(())
}

fn router(state: AppState, config: Arc<ServerConfig>) -> Router {
    let protected = Router::new()
        .route("/api/auth/me", get(auth::controller::get_current_user))
        .route(
            "/api/claims",
            get(claim::controller::get_claim_list).post(claim::controller::post_claim),
        )
        .route("/api/claims/{id}", get(claim::controller::get_claim))
        .route(
            "/api/claims/{id}/history",
            get(claim::controller::get_claim_history),
        )
        .route(
            "/api/claims/{id}/status",
            put(claim::controller::put_claim_status),
        )
        .route(
            "/api/claims/{id}/upload",
            post(claim::controller::post_claim_document)
                .layer(DefaultBodyLimit::max(config.max_upload_size)),
        )
        .route(
            "/api/dashboard/stats",
            get(dashboard::controller::get_dashboard_stats),
        )
        .route(
            "/api/dashboard/map-data",
            get(dashboard::controller::get_map_data),
        )
        .route(
            "/api/reports/summary",
            get(report::controller::get_summary_report),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::bearer_check,
        ));

    let mut unprotected = Router::new()
        .route("/api/", get(misc::get_status))
        .route("/api/auth/register", post(auth::controller::register))
        .route("/api/auth/login", post(auth::controller::login))
        .route("/api/{*rest}", any(misc::api_not_found));

    // with a frontend configured `/` resolves to its index page
    if config.frontend_dir.is_none() {
        unprotected = unprotected.route("/", get(misc::get_status));
    }

    let mut technical_endpoints = Router::new();
    if config.enable_server_info {
        technical_endpoints = technical_endpoints
            .route("/build-info", get(misc::get_build_info))
            .route("/health", get(misc::health_check));
    }
    if config.enable_metrics {
        technical_endpoints = technical_endpoints.route("/metrics", get(misc::get_metrics));
    }

    let mut router = Router::new()
        .merge(protected)
        .merge(unprotected)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let context = get_http_request_context(request);
                    info_span!(
                        "http_request",
                        method = context.method,
                        path = context.path,
                        service = "fra-atlas",
                        RequestId = context.request_id,
                        SessionId = context.session_id,
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {}) // override default on_failure handler
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        )
        .layer(middleware::from_fn(crate::middleware::sentry_layer));

    if config.enable_open_api {
        router = router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", gen_openapi_documentation()),
        );
    }

    if let Some(frontend_dir) = &config.frontend_dir {
        let index = frontend_dir.join("index.html");
        router = router.fallback_service(ServeDir::new(frontend_dir).fallback(ServeFile::new(index)));
    }

    router
        .layer(middleware::from_fn(crate::middleware::metrics_counter))
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::auth::controller::register,
            endpoint::auth::controller::login,
            endpoint::auth::controller::get_current_user,

            endpoint::claim::controller::post_claim,
            endpoint::claim::controller::get_claim_list,
            endpoint::claim::controller::get_claim,
            endpoint::claim::controller::get_claim_history,
            endpoint::claim::controller::put_claim_status,
            endpoint::claim::controller::post_claim_document,

            endpoint::dashboard::controller::get_dashboard_stats,
            endpoint::dashboard::controller::get_map_data,

            endpoint::report::controller::get_summary_report,

            endpoint::misc::get_status,
            endpoint::misc::get_build_info,
            endpoint::misc::health_check,
            endpoint::misc::get_metrics,
        ),
        components(
            schemas(
                endpoint::auth::dto::RegisterUserRequestRestDTO,
                endpoint::auth::dto::LoginRequestRestDTO,
                endpoint::auth::dto::AuthResponseRestDTO,
                endpoint::auth::dto::UserResponseRestDTO,
                endpoint::auth::dto::RoleRestEnum,

                endpoint::claim::dto::CreateClaimRequestRestDTO,
                endpoint::claim::dto::ClaimLocationRestDTO,
                endpoint::claim::dto::ClaimStatusRestEnum,
                endpoint::claim::dto::ClaimResponseRestDTO,
                endpoint::claim::dto::UpdateClaimStatusRequestRestDTO,
                endpoint::claim::dto::UploadDocumentRequestRestDTO,
                endpoint::claim::dto::UploadDocumentResponseRestDTO,
                endpoint::claim::dto::ClaimHistoryResponseRestDTO,
                endpoint::claim::dto::ClaimHistoryActionRestEnum,

                endpoint::dashboard::dto::DashboardStatsResponseRestDTO,
                endpoint::dashboard::dto::ClaimStatisticsRestDTO,
                endpoint::dashboard::dto::MapDataEntryRestDTO,

                endpoint::report::dto::SummaryReportRestDTO,
                endpoint::report::dto::StateSummaryRestDTO,

                endpoint::misc::ServiceStatusRestDTO,

                dto::error::ErrorResponseRestDTO,
                dto::error::ErrorCode,
                dto::error::Cause,

                shared_types::ClaimId,
                shared_types::ClaimHistoryId,
                shared_types::UserId,
            )
        ),
        tags(
            (name = "other", description = "Other utility endpoints"),
            (name = "auth", description = "Registration and login"),
            (name = "claim_management", description = "Claim management"),
            (name = "dashboard", description = "Dashboard statistics and map data"),
            (name = "report", description = "Reports"),
        ),
        modifiers(&SecurityAddon)
    )]
    struct ApiDoc;

    struct SecurityAddon;

    impl Modify for SecurityAddon {
        fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
            let Some(components) = openapi.components.as_mut() else {
                return;
            };
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by register or login"))
                        .build(),
                ),
            );
        }
    }

    let mut docs = ApiDoc::openapi();
    docs.info.version = app_version();

    docs
}

fn app_version() -> String {
    format!("{}-{}", build_info::PKG_VERSION, build_info::SHORT_COMMIT)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic(message).into_response()
}
