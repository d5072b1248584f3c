use shared_types::ClaimId;
use time::OffsetDateTime;

use crate::model::claim::{ClaimLocation, ClaimStatus};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClaimStatistics {
    pub total_claims: u64,
    pub pending_claims: u64,
    pub under_review_claims: u64,
    pub approved_claims: u64,
    pub rejected_claims: u64,
    /// Fraction of approved claims in `0.0..=1.0`
    pub approval_rate: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardStatsResponseDTO {
    pub statistics: ClaimStatistics,
    pub ai_insights: Option<DashboardInsightDTO>,
    pub last_updated: OffsetDateTime,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DashboardInsightDTO {
    pub text: String,
    pub generated_at: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapDataEntryDTO {
    pub id: ClaimId,
    pub title: String,
    pub status: ClaimStatus,
    pub location: ClaimLocation,
    pub created_date: OffsetDateTime,
}
