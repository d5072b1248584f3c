use fra_core::service::dashboard::dto::DashboardStatsResponseDTO;

use super::dto::DashboardStatsResponseRestDTO;

impl From<DashboardStatsResponseDTO> for DashboardStatsResponseRestDTO {
    fn from(value: DashboardStatsResponseDTO) -> Self {
        Self {
            statistics: value.statistics.into(),
            ai_insights: value.ai_insights.map(|insight| insight.text),
            last_updated: value.last_updated,
        }
    }
}
