use shared_types::{ClaimId, UserId};
use strum::{Display, EnumString};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq)]
pub struct Claim {
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

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClaimLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub village: Option<String>,
}

impl ClaimLocation {
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ClaimStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateClaimStatusRequest {
    pub id: ClaimId,
    pub status: ClaimStatus,
    pub officer_notes: Option<String>,
    pub reviewed_by: UserId,
    pub last_modified: OffsetDateTime,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddClaimDocumentRequest {
    pub id: ClaimId,
    pub document: String,
    /// Replaces the stored analysis only when set
    pub ai_analysis: Option<String>,
    pub last_modified: OffsetDateTime,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClaimListFilter {
    pub user_id: Option<UserId>,
}
