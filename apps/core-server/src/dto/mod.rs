pub mod error;
pub(crate) mod mapper;
pub mod response;
