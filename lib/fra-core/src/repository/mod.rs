use std::sync::Arc;

pub mod claim_history_repository;
pub mod claim_repository;
pub mod error;
pub mod user_repository;

use claim_history_repository::ClaimHistoryRepository;
use claim_repository::ClaimRepository;
use user_repository::UserRepository;

pub trait DataRepository: Send + Sync {
    fn get_claim_repository(&self) -> Arc<dyn ClaimRepository>;
    fn get_claim_history_repository(&self) -> Arc<dyn ClaimHistoryRepository>;
    fn get_user_repository(&self) -> Arc<dyn UserRepository>;
}
