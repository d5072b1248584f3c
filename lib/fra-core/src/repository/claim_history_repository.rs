use shared_types::ClaimId;

use super::error::DataLayerError;
use crate::model::claim_history::ClaimHistory;

/// Entries are written by [`super::claim_repository::ClaimRepository`] alongside the claim change
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ClaimHistoryRepository: Send + Sync {
    /// Entries of a single claim, oldest first
    async fn get_claim_history_list(
        &self,
        claim_id: &ClaimId,
    ) -> Result<Vec<ClaimHistory>, DataLayerError>;
}
