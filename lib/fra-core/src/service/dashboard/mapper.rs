use super::dto::{ClaimStatistics, MapDataEntryDTO};
use crate::model::claim::Claim;
use crate::provider::insight::InsightRequest;

const SAMPLE_SIZE: usize = 5;

const DASHBOARD_INSTRUCTION: &str = "You are an assistant specialised in analysing Forest \
Rights Act claims data and providing policy insights.";

pub(super) fn map_entry(claim: Claim) -> Option<MapDataEntryDTO> {
    claim.location.coordinates()?;

    Some(MapDataEntryDTO {
        id: claim.id,
        title: claim.title,
        status: claim.status,
        location: claim.location,
        created_date: claim.created_date,
    })
}

pub(super) fn insight_request(statistics: &ClaimStatistics, claims: &[Claim]) -> InsightRequest {
    let sample = claims
        .iter()
        .take(SAMPLE_SIZE)
        .map(|claim| {
            format!(
                "- {} | status: {} | state: {} | district: {} | area: {} ha",
                claim.title,
                claim.status,
                claim.location.state.as_deref().unwrap_or("unknown"),
                claim.location.district.as_deref().unwrap_or("unknown"),
                claim
                    .area_hectares
                    .map(|area| area.to_string())
                    .unwrap_or_else(|| "unknown".to_owned()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = format!(
        "Analyse the following FRA claims statistics and provide insights.\n\n\
         Total claims: {}\n\
         Pending: {}\n\
         Under review: {}\n\
         Approved: {}\n\
         Rejected: {}\n\
         Approval rate: {:.1}%\n\n\
         Sample claims:\n{sample}\n\n\
         Cover approval patterns, areas with the longest delays, processing \
         recommendations, potential fraud indicators and policy recommendations. \
         Return structured JSON with the categories trends, recommendations, alerts, statistics.",
        statistics.total_claims,
        statistics.pending_claims,
        statistics.under_review_claims,
        statistics.approved_claims,
        statistics.rejected_claims,
        statistics.approval_rate * 100.0,
    );

    InsightRequest {
        system_instruction: DASHBOARD_INSTRUCTION.to_owned(),
        prompt,
        attachment: None,
    }
}
