use std::sync::Arc;

use crate::repository::claim_repository::ClaimRepository;

pub mod dto;
mod mapper;
pub mod service;

#[derive(Clone)]
pub struct ReportService {
    claim_repository: Arc<dyn ClaimRepository>,
}

impl ReportService {
    pub fn new(claim_repository: Arc<dyn ClaimRepository>) -> Self {
        Self { claim_repository }
    }
}
