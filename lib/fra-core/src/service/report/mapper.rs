use std::collections::BTreeMap;

use super::dto::StateSummaryDTO;
use crate::model::claim::{Claim, ClaimStatus};

/// Groups claims by state, sorted by state name with the `None` group first
pub(super) fn summarize_by_state(claims: Vec<Claim>) -> Vec<StateSummaryDTO> {
    let mut groups: BTreeMap<Option<String>, StateSummaryDTO> = BTreeMap::new();

    for claim in claims {
        let state = claim.location.state;
        let summary = groups
            .entry(state.to_owned())
            .or_insert_with(|| StateSummaryDTO {
                state,
                ..Default::default()
            });

        summary.total_claims += 1;
        match claim.status {
            ClaimStatus::Pending => summary.pending += 1,
            ClaimStatus::UnderReview => summary.under_review += 1,
            ClaimStatus::Approved => summary.approved += 1,
            ClaimStatus::Rejected => summary.rejected += 1,
        }
    }

    groups.into_values().collect()
}
