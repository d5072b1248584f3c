use shared_types::{ClaimId, UserId};
use thiserror::Error;

use crate::model::user::Role;
use crate::provider::ProviderError;
use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Permission(#[from] PermissionError),

    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),

    #[error(transparent)]
    Unauthenticated(#[from] AuthenticationError),

    #[error(transparent)]
    Repository(#[from] DataLayerError),

    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Document storage error: `{0}`")]
    DocumentStorage(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("User `{0}` not found")]
    User(UserId),

    #[error("Claim `{0}` not found")]
    Claim(ClaimId),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid claim status `{0}`")]
    InvalidClaimStatus(String),

    #[error("Invalid role `{0}`")]
    InvalidRole(String),

    #[error("Missing or empty field `{0}`")]
    MissingField(&'static str),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password must have at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Area must be a non-negative number, got `{0}`")]
    InvalidArea(f64),

    #[error("Latitude must be within [-90, 90], got `{0}`")]
    InvalidLatitude(f64),

    #[error("Longitude must be within [-180, 180], got `{0}`")]
    InvalidLongitude(f64),

    #[error("Latitude and longitude must be provided together")]
    IncompleteCoordinates,

    #[error("Invalid document file name `{0}`")]
    InvalidFileName(String),

    #[error("Uploaded document is empty")]
    EmptyDocument,
}

#[derive(Debug, Error)]
pub enum PermissionError {
    #[error("Role `{0}` cannot change claim status")]
    TransitionNotAllowed(Role),

    #[error("Claim `{0}` is not visible to the caller")]
    ClaimNotVisible(ClaimId),

    #[error("Role `{0}` cannot be chosen at registration")]
    RegistrationRoleRestricted(Role),
}

#[derive(Debug, Error)]
pub enum BusinessLogicError {
    #[error("Email already registered")]
    EmailAlreadyRegistered,
}

#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token subject `{0}` no longer exists")]
    UnknownUser(UserId),
}

pub trait ErrorCodeMixin {
    fn error_code(&self) -> ErrorCode;
}

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCode {
    BR_0000,
    BR_0001,
    BR_0002,
    BR_0003,
    BR_0004,
    BR_0005,
    BR_0006,
    BR_0007,
    BR_0008,
    BR_0009,
    BR_0010,
    BR_0054,
    BR_0055,
    BR_0084,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::BR_0000 => "Unspecified error",
            ErrorCode::BR_0001 => "User not found",
            ErrorCode::BR_0002 => "Claim not found",
            ErrorCode::BR_0003 => "Invalid status or role value",
            ErrorCode::BR_0004 => "Invalid input data",
            ErrorCode::BR_0005 => "Operation not permitted for caller",
            ErrorCode::BR_0006 => "Email already registered",
            ErrorCode::BR_0007 => "Not authenticated",
            ErrorCode::BR_0008 => "Invalid document upload",
            ErrorCode::BR_0009 => "Document storage error",
            ErrorCode::BR_0010 => "Provider error",
            ErrorCode::BR_0054 => "Database error",
            ErrorCode::BR_0055 => "Response mapping error",
            ErrorCode::BR_0084 => "General input validation error",
        }
    }
}

impl ErrorCodeMixin for ServiceError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::EntityNotFound(error) => error.error_code(),
            Self::Validation(error) => error.error_code(),
            Self::Permission(_) => ErrorCode::BR_0005,
            Self::BusinessLogic(error) => error.error_code(),
            Self::Unauthenticated(_) => ErrorCode::BR_0007,
            Self::Repository(error) => error.error_code(),
            Self::MappingError(_) => ErrorCode::BR_0055,
            Self::Provider(_) => ErrorCode::BR_0010,
            Self::DocumentStorage(_) => ErrorCode::BR_0009,
        }
    }
}

impl ErrorCodeMixin for EntityNotFoundError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::User(_) => ErrorCode::BR_0001,
            Self::Claim(_) => ErrorCode::BR_0002,
        }
    }
}

impl ErrorCodeMixin for ValidationError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidClaimStatus(_) | Self::InvalidRole(_) => ErrorCode::BR_0003,
            Self::InvalidFileName(_) | Self::EmptyDocument => ErrorCode::BR_0008,
            Self::MissingField(_)
            | Self::InvalidEmail
            | Self::PasswordTooShort { .. }
            | Self::InvalidArea(_)
            | Self::InvalidLatitude(_)
            | Self::InvalidLongitude(_)
            | Self::IncompleteCoordinates => ErrorCode::BR_0004,
        }
    }
}

impl ErrorCodeMixin for BusinessLogicError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmailAlreadyRegistered => ErrorCode::BR_0006,
        }
    }
}

impl From<uuid::Error> for ServiceError {
    fn from(value: uuid::Error) -> Self {
        ServiceError::MappingError(value.to_string())
    }
}
