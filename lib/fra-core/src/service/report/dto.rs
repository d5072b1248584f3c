use time::OffsetDateTime;

pub const SUMMARY_REPORT_TYPE: &str = "summary";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SummaryReportDTO {
    pub report_type: String,
    pub generated_at: OffsetDateTime,
    pub data: Vec<StateSummaryDTO>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StateSummaryDTO {
    /// `None` groups claims without a recorded state
    pub state: Option<String>,
    pub total_claims: u64,
    pub approved: u64,
    pub pending: u64,
    pub under_review: u64,
    pub rejected: u64,
}
