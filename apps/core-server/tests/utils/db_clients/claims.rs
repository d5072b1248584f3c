use std::sync::Arc;

use fra_core::model::claim::Claim;
use fra_core::repository::claim_repository::ClaimRepository;
use shared_types::ClaimId;

pub struct ClaimsDB {
    repository: Arc<dyn ClaimRepository>,
}

impl ClaimsDB {
    pub fn new(repository: Arc<dyn ClaimRepository>) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: &ClaimId) -> Claim {
        self.repository.get_claim(id).await.unwrap().unwrap()
    }
}
