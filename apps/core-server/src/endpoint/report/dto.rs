use fra_core::service::report::dto::{StateSummaryDTO, SummaryReportDTO};
use one_dto_mapper::{From, convert_inner};
use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::serialize::front_time;

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(SummaryReportDTO)]
pub(crate) struct SummaryReportRestDTO {
    #[schema(example = "summary")]
    pub report_type: String,
    #[serde(serialize_with = "front_time")]
    #[schema(example = "2024-03-01T10:15:00.000Z")]
    pub generated_at: OffsetDateTime,
    #[from(with_fn = convert_inner)]
    pub data: Vec<StateSummaryRestDTO>,
}

/// Claim counts of one state
#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(StateSummaryDTO)]
pub(crate) struct StateSummaryRestDTO {
    /// `null` for claims without a recorded state
    #[schema(example = "Maharashtra")]
    pub state: Option<String>,
    pub total_claims: u64,
    pub approved: u64,
    pub pending: u64,
    pub under_review: u64,
    pub rejected: u64,
}
