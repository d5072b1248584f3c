pub mod auth;
pub mod claim;
pub mod dashboard;
pub mod misc;
pub mod report;
