use one_dto_mapper::From;
use shared_types::{ClaimHistoryId, ClaimId, UserId};
use time::OffsetDateTime;

use crate::model::claim::{Claim, ClaimLocation, ClaimStatus};
use crate::model::claim_history::{ClaimHistory, ClaimHistoryAction};

#[derive(Clone, Debug)]
pub struct CreateClaimRequestDTO {
    pub title: String,
    pub description: String,
    pub location: ClaimLocation,
    pub area_hectares: Option<f64>,
    pub forest_type: Option<String>,
    pub community_details: Option<String>,
}

#[derive(Clone, Debug, PartialEq, From)]
#[from(Claim)]
pub struct GetClaimResponseDTO {
    pub id: ClaimId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub title: String,
    pub description: String,
    pub location: ClaimLocation,
    pub area_hectares: Option<f64>,
    pub forest_type: Option<String>,
    pub community_details: Option<String>,
    pub status: ClaimStatus,
    pub documents: Vec<String>,
    pub ai_analysis: Option<String>,
    pub user_id: UserId,
    pub officer_notes: Option<String>,
    pub reviewed_by: Option<UserId>,
}

#[derive(Clone, Debug)]
pub struct UpdateClaimStatusRequestDTO {
    /// Wire form, parsed by the service
    pub status: String,
    pub officer_notes: Option<String>,
}

#[derive(Clone, Debug)]
pub struct UploadDocumentRequestDTO {
    pub file_name: String,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UploadDocumentResponseDTO {
    pub file_path: String,
    pub ai_analysis: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, From)]
#[from(ClaimHistory)]
pub struct ClaimHistoryResponseDTO {
    pub id: ClaimHistoryId,
    pub created_date: OffsetDateTime,
    pub actor_id: UserId,
    pub action: ClaimHistoryAction,
    pub previous_status: Option<ClaimStatus>,
    pub status: ClaimStatus,
    pub notes: Option<String>,
}
