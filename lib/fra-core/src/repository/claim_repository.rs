use shared_types::ClaimId;

use super::error::DataLayerError;
use crate::model::claim::{
    AddClaimDocumentRequest, Claim, ClaimListFilter, UpdateClaimStatusRequest,
};
use crate::model::claim_history::ClaimHistory;

/// Every write stores the claim change together with its history entry, or neither
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ClaimRepository: Send + Sync {
    async fn create_claim(
        &self,
        request: Claim,
        history: ClaimHistory,
    ) -> Result<ClaimId, DataLayerError>;

    async fn get_claim(&self, id: &ClaimId) -> Result<Option<Claim>, DataLayerError>;

    /// Newest claims first
    async fn get_claim_list(&self, filter: ClaimListFilter)
    -> Result<Vec<Claim>, DataLayerError>;

    /// Fails with [`DataLayerError::RecordNotUpdated`] when the claim does not exist
    async fn update_claim_status(
        &self,
        request: UpdateClaimStatusRequest,
        history: ClaimHistory,
    ) -> Result<(), DataLayerError>;

    /// A document already attached to the claim is not listed twice
    async fn add_claim_document(
        &self,
        request: AddClaimDocumentRequest,
        history: ClaimHistory,
    ) -> Result<(), DataLayerError>;
}
