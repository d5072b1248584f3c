use thiserror::Error;

pub mod core_config;

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Config parsing error: `{0}`")]
    GeneralParsingError(String),
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Token secret must not be empty")]
    EmptyTokenSecret,
    #[error("Token lifetime must be positive, got `{0}`")]
    InvalidTokenLifetime(time::Duration),
}
