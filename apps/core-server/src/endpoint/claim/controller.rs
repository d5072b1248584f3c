use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::{Extension, Json};
use axum_extra::extract::WithRejection;
use fra_core::model::actor::Actor;
use fra_core::service::claim::dto::UploadDocumentRequestDTO;
use shared_types::ClaimId;

use super::dto::{
    ClaimHistoryResponseRestDTO, ClaimResponseRestDTO, CreateClaimRequestRestDTO,
    UpdateClaimStatusRequestRestDTO, UploadDocumentRequestRestDTO, UploadDocumentResponseRestDTO,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{ErrorResponse, OkOrErrorResponse, VecResponse};
use crate::router::AppState;

/// Name of the multipart field carrying the uploaded document
const DOCUMENT_FIELD: &str = "file";

#[utoipa::path(
    post,
    path = "/api/claims",
    request_body(
        content = CreateClaimRequestRestDTO,
        example = json!({
            "title": "Forest Plot A",
            "description": "Community forest resource claim",
            "location": { "lat": 20.17, "lng": 80.02, "state": "Maharashtra", "district": "Gadchiroli", "village": "Mendha" },
            "area_hectares": 2.5
        }),
    ),
    responses(OkOrErrorResponse<ClaimResponseRestDTO>),
    tag = "claim_management",
    security(
        ("bearer" = [])
    ),
    summary = "Submit claim",
    description = "Submits a forest-rights claim. New claims always start in `pending` status.",
)]
pub(crate) async fn post_claim(
    state: State<AppState>,
    Extension(actor): Extension<Actor>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateClaimRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<ClaimResponseRestDTO> {
    let result = state
        .core
        .claim_service
        .create_claim(&actor, request.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "creating claim")
}

#[utoipa::path(
    get,
    path = "/api/claims",
    responses(OkOrErrorResponse<VecResponse<ClaimResponseRestDTO>>),
    tag = "claim_management",
    security(
        ("bearer" = [])
    ),
    summary = "List claims",
    description = indoc::formatdoc! {"
        Returns the claims visible to the caller, newest first. Community users
        only see their own submissions.
    "},
)]
pub(crate) async fn get_claim_list(
    state: State<AppState>,
    Extension(actor): Extension<Actor>,
) -> OkOrErrorResponse<VecResponse<ClaimResponseRestDTO>> {
    let result = state.core.claim_service.get_claim_list(&actor).await;
    OkOrErrorResponse::from_result(result, state, "listing claims")
}

#[utoipa::path(
    get,
    path = "/api/claims/{id}",
    responses(OkOrErrorResponse<ClaimResponseRestDTO>),
    params(
        ("id" = ClaimId, Path, description = "Claim id")
    ),
    tag = "claim_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve claim",
    description = "Returns details of a single claim.",
)]
pub(crate) async fn get_claim(
    state: State<AppState>,
    Extension(actor): Extension<Actor>,
    WithRejection(Path(id), _): WithRejection<Path<ClaimId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<ClaimResponseRestDTO> {
    let result = state.core.claim_service.get_claim(&actor, &id).await;
    OkOrErrorResponse::from_result(result, state, "getting claim")
}

#[utoipa::path(
    get,
    path = "/api/claims/{id}/history",
    responses(OkOrErrorResponse<VecResponse<ClaimHistoryResponseRestDTO>>),
    params(
        ("id" = ClaimId, Path, description = "Claim id")
    ),
    tag = "claim_management",
    security(
        ("bearer" = [])
    ),
    summary = "Claim history",
    description = "Returns the recorded events of a claim, oldest first.",
)]
pub(crate) async fn get_claim_history(
    state: State<AppState>,
    Extension(actor): Extension<Actor>,
    WithRejection(Path(id), _): WithRejection<Path<ClaimId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<VecResponse<ClaimHistoryResponseRestDTO>> {
    let result = state
        .core
        .claim_service
        .get_claim_history(&actor, &id)
        .await;
    OkOrErrorResponse::from_result(result, state, "getting claim history")
}

#[utoipa::path(
    put,
    path = "/api/claims/{id}/status",
    request_body(
        content = UpdateClaimStatusRequestRestDTO,
        example = json!({ "status": "approved", "officer_notes": "Verified documents" }),
    ),
    responses(OkOrErrorResponse<ClaimResponseRestDTO>),
    params(
        ("id" = ClaimId, Path, description = "Claim id")
    ),
    tag = "claim_management",
    security(
        ("bearer" = [])
    ),
    summary = "Change claim status",
    description = indoc::formatdoc! {"
        Moves a claim to any of the four statuses. Only District Officer and
        Ministry users may change statuses. Officer notes replace previous notes.
    "},
)]
pub(crate) async fn put_claim_status(
    state: State<AppState>,
    Extension(actor): Extension<Actor>,
    WithRejection(Path(id), _): WithRejection<Path<ClaimId>, ErrorResponseRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdateClaimStatusRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<ClaimResponseRestDTO> {
    let result = state
        .core
        .claim_service
        .update_claim_status(&actor, &id, request.into())
        .await;
    OkOrErrorResponse::from_result(result, state, "updating claim status")
}

#[utoipa::path(
    post,
    path = "/api/claims/{id}/upload",
    request_body(
        content = UploadDocumentRequestRestDTO,
        content_type = "multipart/form-data",
    ),
    responses(OkOrErrorResponse<UploadDocumentResponseRestDTO>),
    params(
        ("id" = ClaimId, Path, description = "Claim id")
    ),
    tag = "claim_management",
    security(
        ("bearer" = [])
    ),
    summary = "Upload document",
    description = indoc::formatdoc! {"
        Stores a supporting document and attaches it to the claim. When AI insights
        are enabled the document is analysed and the analysis saved with the claim.
    "},
)]
pub(crate) async fn post_claim_document(
    state: State<AppState>,
    Extension(actor): Extension<Actor>,
    WithRejection(Path(id), _): WithRejection<Path<ClaimId>, ErrorResponseRestDTO>,
    WithRejection(multipart, _): WithRejection<Multipart, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<UploadDocumentResponseRestDTO> {
    let request = match read_document(multipart).await {
        Ok(Some(request)) => request,
        Ok(None) => {
            return ErrorResponse::BadRequest(ErrorResponseRestDTO::input_validation(format!(
                "Missing `{DOCUMENT_FIELD}` field"
            )))
            .into();
        }
        Err(error) => {
            tracing::warn!(%error, "Failed to read uploaded document");
            return ErrorResponse::BadRequest(error.into()).into();
        }
    };

    let result = state
        .core
        .claim_service
        .upload_document(&actor, &id, request)
        .await;
    OkOrErrorResponse::from_result(result, state, "uploading claim document")
}

async fn read_document(
    mut multipart: Multipart,
) -> Result<Option<UploadDocumentRequestDTO>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(DOCUMENT_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_owned();
        let content_type = field.content_type().map(ToOwned::to_owned);
        let content = field.bytes().await?.to_vec();

        return Ok(Some(UploadDocumentRequestDTO {
            file_name,
            content_type,
            content,
        }));
    }

    Ok(None)
}
