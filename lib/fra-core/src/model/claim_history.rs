use shared_types::{ClaimHistoryId, ClaimId, UserId};
use time::OffsetDateTime;

use super::claim::ClaimStatus;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimHistory {
    pub id: ClaimHistoryId,
    pub created_date: OffsetDateTime,
    pub claim_id: ClaimId,
    pub actor_id: UserId,
    pub action: ClaimHistoryAction,
    pub previous_status: Option<ClaimStatus>,
    pub status: ClaimStatus,
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClaimHistoryAction {
    Created,
    StatusChanged,
    DocumentAdded,
}
