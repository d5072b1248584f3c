use fra_core::model::claim::ClaimStatus;
use fra_core::model::claim_history::ClaimHistoryAction;
use fra_core::service::claim::dto::{
    ClaimHistoryResponseDTO, CreateClaimRequestDTO, GetClaimResponseDTO,
    UpdateClaimStatusRequestDTO,
};
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::{ClaimHistoryId, ClaimId, UserId};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::serialize::front_time;

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(deny_unknown_fields)]
#[into(CreateClaimRequestDTO)]
pub(crate) struct CreateClaimRequestRestDTO {
    #[schema(example = "Forest Plot A")]
    pub title: String,
    #[schema(example = "Community forest resource claim for grazing land")]
    pub description: String,
    pub location: ClaimLocationRestDTO,
    #[serde(default)]
    #[schema(example = 2.5)]
    pub area_hectares: Option<f64>,
    #[serde(default)]
    pub forest_type: Option<String>,
    #[serde(default)]
    pub community_details: Option<String>,
}

/// Position and administrative region of a claimed area
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClaimLocationRestDTO {
    #[serde(default)]
    #[schema(example = 20.17)]
    pub lat: Option<f64>,
    #[serde(default)]
    #[schema(example = 80.02)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    #[schema(example = "Maharashtra")]
    pub state: Option<String>,
    #[serde(default)]
    #[schema(example = "Gadchiroli")]
    pub district: Option<String>,
    #[serde(default)]
    #[schema(example = "Mendha")]
    pub village: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From)]
#[serde(rename_all = "snake_case")]
#[from(ClaimStatus)]
pub(crate) enum ClaimStatusRestEnum {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(GetClaimResponseDTO)]
pub(crate) struct ClaimResponseRestDTO {
    pub id: ClaimId,
    pub title: String,
    pub description: String,
    pub location: ClaimLocationRestDTO,
    pub area_hectares: Option<f64>,
    pub forest_type: Option<String>,
    pub community_details: Option<String>,
    pub status: ClaimStatusRestEnum,
    /// Stored paths of the attached documents
    pub documents: Vec<String>,
    pub ai_analysis: Option<String>,
    /// Submitting user
    pub user_id: UserId,
    pub officer_notes: Option<String>,
    /// User who last changed the status
    pub reviewed_by: Option<UserId>,
    #[serde(rename = "created_at", serialize_with = "front_time")]
    #[schema(example = "2024-03-01T10:15:00.000Z")]
    pub created_date: OffsetDateTime,
    #[serde(rename = "updated_at", serialize_with = "front_time")]
    #[schema(example = "2024-03-02T08:00:00.000Z")]
    pub last_modified: OffsetDateTime,
}

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(deny_unknown_fields)]
#[into(UpdateClaimStatusRequestDTO)]
pub(crate) struct UpdateClaimStatusRequestRestDTO {
    /// One of `pending`, `under_review`, `approved`, `rejected`
    #[schema(example = "approved")]
    pub status: String,
    #[serde(default)]
    #[schema(example = "Verified documents")]
    pub officer_notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub(crate) struct UploadDocumentResponseRestDTO {
    #[schema(example = "Document uploaded and analyzed successfully")]
    pub message: String,
    pub file_path: String,
    /// Missing when no analysis could be produced
    pub ai_analysis: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(ClaimHistoryResponseDTO)]
pub(crate) struct ClaimHistoryResponseRestDTO {
    pub id: ClaimHistoryId,
    #[serde(rename = "created_at", serialize_with = "front_time")]
    #[schema(example = "2024-03-01T10:15:00.000Z")]
    pub created_date: OffsetDateTime,
    pub actor_id: UserId,
    pub action: ClaimHistoryActionRestEnum,
    #[from(with_fn = convert_inner)]
    pub previous_status: Option<ClaimStatusRestEnum>,
    pub status: ClaimStatusRestEnum,
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, ToSchema, From)]
#[serde(rename_all = "snake_case")]
#[from(ClaimHistoryAction)]
pub(crate) enum ClaimHistoryActionRestEnum {
    Created,
    StatusChanged,
    DocumentAdded,
}

/// Multipart form of a document upload
#[derive(ToSchema)]
#[allow(dead_code)]
pub(crate) struct UploadDocumentRequestRestDTO {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
