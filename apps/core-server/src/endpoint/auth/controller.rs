use axum::extract::State;
use axum::{Extension, Json};
use axum_extra::extract::WithRejection;
use fra_core::model::actor::Actor;

use super::dto::{
    AuthResponseRestDTO, LoginRequestRestDTO, RegisterUserRequestRestDTO, UserResponseRestDTO,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::OkOrErrorResponse;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body(
        content = RegisterUserRequestRestDTO,
        example = json!({
            "email": "ravi@example.org",
            "password": "s3cure-pass",
            "full_name": "Ravi Kumar",
            "role": "Community User",
            "address": "Mendha village"
        }),
    ),
    responses(OkOrErrorResponse<AuthResponseRestDTO>),
    tag = "auth",
    summary = "Register user",
    description = indoc::formatdoc! {"
        Creates a user account and returns a bearer token for it. Emails are
        unique; registering an already known email fails.
    "},
)]
pub(crate) async fn register(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<
        Json<RegisterUserRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<AuthResponseRestDTO> {
    let result = state.core.auth_service.register(request.into()).await;
    OkOrErrorResponse::from_result(result, state, "registering user")
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequestRestDTO,
    responses(OkOrErrorResponse<AuthResponseRestDTO>),
    tag = "auth",
    summary = "Log in",
    description = "Exchanges email and password for a bearer token.",
)]
pub(crate) async fn login(
    state: State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<LoginRequestRestDTO>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<AuthResponseRestDTO> {
    let result = state.core.auth_service.login(request.into()).await;
    OkOrErrorResponse::from_result(result, state, "logging in")
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(OkOrErrorResponse<UserResponseRestDTO>),
    tag = "auth",
    security(
        ("bearer" = [])
    ),
    summary = "Current user",
    description = "Returns the account the bearer token belongs to.",
)]
pub(crate) async fn get_current_user(
    state: State<AppState>,
    Extension(actor): Extension<Actor>,
) -> OkOrErrorResponse<UserResponseRestDTO> {
    let result = state.core.auth_service.get_current_user(&actor).await;
    OkOrErrorResponse::from_result(result, state, "getting current user")
}
