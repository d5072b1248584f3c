use std::time::Instant;

use axum::body::Body;
use axum::extract::{MatchedPath, State};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::TypedHeader;
use axum_extra::typed_header::TypedHeaderRejection;
use fra_core::service::error::{AuthenticationError, ServiceError};
use headers::Authorization;
use headers::authorization::Bearer;
use sentry::{Hub, SentryFutureExt};

use crate::dto::response::ErrorResponse;
use crate::metrics;
use crate::router::AppState;

pub struct HttpRequestContext<'a> {
    pub path: &'a str,
    pub method: &'a str,
    pub request_id: Option<&'a str>,
    pub session_id: Option<&'a str>,
}

// create new sentry hub per request
pub async fn sentry_layer(request: Request<Body>, next: Next) -> Response {
    async {
        let HttpRequestContext {
            method,
            path,
            request_id,
            session_id,
        } = get_http_request_context(&request);

        let path = request
            .extensions()
            .get::<MatchedPath>()
            .map(MatchedPath::as_str)
            .unwrap_or(path);
        let method_path = format!("{method} {path}");

        sentry::configure_scope(|scope| {
            scope.set_tag("http-request", method_path);

            if let Some(request_id) = request_id {
                scope.set_tag("FRA-request-id", request_id);
            }

            if let Some(session_id) = session_id {
                scope.set_tag("FRA-session-id", session_id);
            }
        });

        next.run(request).await
    }
    // make sure that the future is run in the new hub
    .bind_hub(Hub::new_from_top(Hub::main()))
    .await
}

pub async fn metrics_counter(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let response = next.run(request).await;
    metrics::track_request_count_and_time(start.elapsed().as_secs_f64());
    response
}

/// Resolves the bearer token to an [`fra_core::model::actor::Actor`] request extension
pub async fn bearer_check(
    state: State<AppState>,
    authorization: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let hide_cause = state.config.hide_error_response_cause;

    let Ok(TypedHeader(Authorization(bearer))) = authorization else {
        tracing::warn!("Authorization header not found.");
        return ErrorResponse::from_service_error(
            ServiceError::Unauthenticated(AuthenticationError::MissingToken),
            hide_cause,
        )
        .into_response();
    };

    match state.core.auth_service.authenticate(bearer.token()).await {
        Ok(actor) => {
            sentry::configure_scope(|scope| {
                scope.set_user(Some(sentry::User {
                    id: Some(actor.id.to_string()),
                    ..Default::default()
                }));
            });
            request.extensions_mut().insert(actor);
            next.run(request).await
        }
        Err(error) => {
            tracing::warn!(%error, "Could not authorize request.");
            ErrorResponse::from_service_error(error, hide_cause).into_response()
        }
    }
}

pub fn get_http_request_context<T>(request: &Request<T>) -> HttpRequestContext<'_> {
    let headers = request.headers();
    let request_id = headers
        .get("x-request-id")
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty());

    let session_id = headers
        .get("x-session-id")
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty());

    HttpRequestContext {
        path: request.uri().path(),
        method: request.method().as_str(),
        request_id,
        session_id,
    }
}
