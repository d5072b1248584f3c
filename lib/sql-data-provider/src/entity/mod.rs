pub mod claim;
pub mod claim_history;
pub mod user;
