use axum::Extension;
use axum::extract::State;
use fra_core::model::actor::Actor;

use super::dto::SummaryReportRestDTO;
use crate::dto::response::OkOrErrorResponse;
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/api/reports/summary",
    responses(OkOrErrorResponse<SummaryReportRestDTO>),
    tag = "report",
    security(
        ("bearer" = [])
    ),
    summary = "Regional summary",
    description = "Returns claim counts per state and status for the claims visible to the caller.",
)]
pub(crate) async fn get_summary_report(
    state: State<AppState>,
    Extension(actor): Extension<Actor>,
) -> OkOrErrorResponse<SummaryReportRestDTO> {
    let result = state.core.report_service.get_summary_report(&actor).await;
    OkOrErrorResponse::from_result(result, state, "generating summary report")
}
