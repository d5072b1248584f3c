mod claim_history_id;
mod claim_id;
mod macros;
mod user_id;

pub use claim_history_id::ClaimHistoryId;
pub use claim_id::ClaimId;
pub use user_id::UserId;
