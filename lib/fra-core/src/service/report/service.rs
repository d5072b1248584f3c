use time::OffsetDateTime;

use super::ReportService;
use super::dto::{SUMMARY_REPORT_TYPE, SummaryReportDTO};
use super::mapper::summarize_by_state;
use crate::model::actor::Actor;
use crate::service::common_mapper::visible_claims_filter;
use crate::service::error::ServiceError;

impl ReportService {
    /// Per-state claim counts over the claims visible to the actor
    pub async fn get_summary_report(&self, actor: &Actor) -> Result<SummaryReportDTO, ServiceError> {
        let claims = self
            .claim_repository
            .get_claim_list(visible_claims_filter(actor))
            .await?;

        Ok(SummaryReportDTO {
            report_type: SUMMARY_REPORT_TYPE.to_owned(),
            generated_at: OffsetDateTime::now_utc(),
            data: summarize_by_state(claims),
        })
    }
}
