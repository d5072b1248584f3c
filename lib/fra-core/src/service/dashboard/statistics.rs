use super::dto::ClaimStatistics;
use crate::model::claim::{Claim, ClaimStatus};

/// Per-status counts and approval rate over the given claims
pub fn compute_statistics(claims: &[Claim]) -> ClaimStatistics {
    let mut statistics = claims
        .iter()
        .fold(ClaimStatistics::default(), |mut statistics, claim| {
            statistics.total_claims += 1;
            match claim.status {
                ClaimStatus::Pending => statistics.pending_claims += 1,
                ClaimStatus::UnderReview => statistics.under_review_claims += 1,
                ClaimStatus::Approved => statistics.approved_claims += 1,
                ClaimStatus::Rejected => statistics.rejected_claims += 1,
            }
            statistics
        });

    if statistics.total_claims > 0 {
        statistics.approval_rate =
            statistics.approved_claims as f64 / statistics.total_claims as f64;
    }

    statistics
}
