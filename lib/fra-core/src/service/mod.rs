pub mod auth;
pub mod claim;
pub(crate) mod common_mapper;
pub mod dashboard;
pub mod error;
pub mod report;
