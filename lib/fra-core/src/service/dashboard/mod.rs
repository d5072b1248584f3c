use std::sync::Arc;

use crate::provider::insight::InsightProvider;
use crate::repository::claim_repository::ClaimRepository;

pub mod dto;
mod mapper;
pub mod service;
pub mod statistics;

#[derive(Clone)]
pub struct DashboardService {
    claim_repository: Arc<dyn ClaimRepository>,
    insight_provider: Option<Arc<dyn InsightProvider>>,
}

impl DashboardService {
    pub fn new(
        claim_repository: Arc<dyn ClaimRepository>,
        insight_provider: Option<Arc<dyn InsightProvider>>,
    ) -> Self {
        Self {
            claim_repository,
            insight_provider,
        }
    }
}
