use time::OffsetDateTime;

use super::DashboardService;
use super::dto::{DashboardInsightDTO, DashboardStatsResponseDTO, MapDataEntryDTO};
use super::mapper::{insight_request, map_entry};
use super::statistics::compute_statistics;
use crate::model::actor::Actor;
use crate::service::common_mapper::visible_claims_filter;
use crate::service::error::ServiceError;

impl DashboardService {
    /// Statistics over the claims visible to the actor, with an optional generated insight
    pub async fn get_dashboard_stats(
        &self,
        actor: &Actor,
    ) -> Result<DashboardStatsResponseDTO, ServiceError> {
        let claims = self
            .claim_repository
            .get_claim_list(visible_claims_filter(actor))
            .await?;

        let statistics = compute_statistics(&claims);

        let ai_insights = match &self.insight_provider {
            None => None,
            Some(provider) => match provider
                .generate(insight_request(&statistics, &claims))
                .await
            {
                Ok(text) => Some(DashboardInsightDTO {
                    text,
                    generated_at: OffsetDateTime::now_utc(),
                }),
                Err(error) => {
                    tracing::warn!(%error, "Dashboard insight generation failed");
                    None
                }
            },
        };

        Ok(DashboardStatsResponseDTO {
            statistics,
            ai_insights,
            last_updated: OffsetDateTime::now_utc(),
        })
    }

    /// Visible claims which carry both coordinates
    pub async fn get_map_data(&self, actor: &Actor) -> Result<Vec<MapDataEntryDTO>, ServiceError> {
        let claims = self
            .claim_repository
            .get_claim_list(visible_claims_filter(actor))
            .await?;

        Ok(claims.into_iter().filter_map(map_entry).collect())
    }
}
