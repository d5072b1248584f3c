use axum::Extension;
use axum::extract::State;
use fra_core::model::actor::Actor;

use super::dto::{DashboardStatsResponseRestDTO, MapDataEntryRestDTO};
use crate::dto::response::{OkOrErrorResponse, VecResponse};
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses(OkOrErrorResponse<DashboardStatsResponseRestDTO>),
    tag = "dashboard",
    security(
        ("bearer" = [])
    ),
    summary = "Claim statistics",
    description = indoc::formatdoc! {"
        Returns status counts and the approval rate of the claims visible to the
        caller, together with a generated summary when AI insights are enabled.
    "},
)]
pub(crate) async fn get_dashboard_stats(
    state: State<AppState>,
    Extension(actor): Extension<Actor>,
) -> OkOrErrorResponse<DashboardStatsResponseRestDTO> {
    let result = state
        .core
        .dashboard_service
        .get_dashboard_stats(&actor)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting dashboard statistics")
}

#[utoipa::path(
    get,
    path = "/api/dashboard/map-data",
    responses(OkOrErrorResponse<VecResponse<MapDataEntryRestDTO>>),
    tag = "dashboard",
    security(
        ("bearer" = [])
    ),
    summary = "Map data",
    description = "Returns location and status of every visible claim with coordinates.",
)]
pub(crate) async fn get_map_data(
    state: State<AppState>,
    Extension(actor): Extension<Actor>,
) -> OkOrErrorResponse<VecResponse<MapDataEntryRestDTO>> {
    let result = state.core.dashboard_service.get_map_data(&actor).await;
    OkOrErrorResponse::from_result(result, state, "getting map data")
}
