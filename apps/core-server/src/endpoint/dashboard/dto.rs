use fra_core::service::dashboard::dto::{ClaimStatistics, MapDataEntryDTO};
use one_dto_mapper::From;
use serde::Serialize;
use shared_types::ClaimId;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::endpoint::claim::dto::{ClaimLocationRestDTO, ClaimStatusRestEnum};
use crate::serialize::front_time;

#[derive(Clone, Debug, Serialize, ToSchema)]
pub(crate) struct DashboardStatsResponseRestDTO {
    pub statistics: ClaimStatisticsRestDTO,
    /// Generated summary of the statistics, missing when insights are unavailable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<String>,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2024-03-01T10:15:00.000Z")]
    pub last_updated: OffsetDateTime,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(ClaimStatistics)]
pub(crate) struct ClaimStatisticsRestDTO {
    pub total_claims: u64,
    pub pending_claims: u64,
    pub under_review_claims: u64,
    pub approved_claims: u64,
    pub rejected_claims: u64,
    /// Approved share of all claims, `0` when there are none
    #[schema(example = 0.5)]
    pub approval_rate: f64,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(MapDataEntryDTO)]
pub(crate) struct MapDataEntryRestDTO {
    pub id: ClaimId,
    pub title: String,
    pub status: ClaimStatusRestEnum,
    pub location: ClaimLocationRestDTO,
    #[serde(rename = "created_at", serialize_with = "front_time")]
    #[schema(example = "2024-03-01T10:15:00.000Z")]
    pub created_date: OffsetDateTime,
}
