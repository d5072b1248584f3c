use std::str::FromStr;

use validator::ValidateEmail;

use super::dto::RegisterUserRequestDTO;
use crate::config::core_config::AuthConfig;
use crate::model::user::Role;
use crate::service::error::{PermissionError, ServiceError, ValidationError};

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

pub(super) fn validate_register_request(
    request: &RegisterUserRequestDTO,
    config: &AuthConfig,
) -> Result<Role, ServiceError> {
    if !request.email.trim().validate_email() {
        return Err(ValidationError::InvalidEmail.into());
    }

    if request.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        }
        .into());
    }

    if request.full_name.trim().is_empty() {
        return Err(ValidationError::MissingField("full_name").into());
    }

    let role = Role::from_str(&request.role)
        .map_err(|_| ValidationError::InvalidRole(request.role.to_owned()))?;

    if config.restricted_registration_roles.contains(&role) {
        return Err(PermissionError::RegistrationRoleRestricted(role).into());
    }

    Ok(role)
}
