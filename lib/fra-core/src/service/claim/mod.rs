use std::sync::Arc;

use crate::provider::document_storage::DocumentStorage;
use crate::provider::insight::InsightProvider;
use crate::repository::claim_history_repository::ClaimHistoryRepository;
use crate::repository::claim_repository::ClaimRepository;

pub mod dto;
mod mapper;
pub mod service;
mod validator;

#[derive(Clone)]
pub struct ClaimService {
    claim_repository: Arc<dyn ClaimRepository>,
    claim_history_repository: Arc<dyn ClaimHistoryRepository>,
    document_storage: Arc<dyn DocumentStorage>,
    insight_provider: Option<Arc<dyn InsightProvider>>,
}

impl ClaimService {
    pub fn new(
        claim_repository: Arc<dyn ClaimRepository>,
        claim_history_repository: Arc<dyn ClaimHistoryRepository>,
        document_storage: Arc<dyn DocumentStorage>,
        insight_provider: Option<Arc<dyn InsightProvider>>,
    ) -> Self {
        Self {
            claim_repository,
            claim_history_repository,
            document_storage,
            insight_provider,
        }
    }
}
