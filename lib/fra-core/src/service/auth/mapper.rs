use shared_types::UserId;
use time::OffsetDateTime;

use super::dto::RegisterUserRequestDTO;
use crate::model::user::{Role, User};

pub(super) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub(super) fn user_from_request(
    request: RegisterUserRequestDTO,
    role: Role,
    password_hash: String,
    now: OffsetDateTime,
) -> User {
    User {
        id: UserId::new_v4(),
        created_date: now,
        last_modified: now,
        email: normalize_email(&request.email),
        password_hash,
        full_name: request.full_name.trim().to_owned(),
        role,
        phone: request.phone.filter(|phone| !phone.trim().is_empty()),
        address: request.address.filter(|address| !address.trim().is_empty()),
    }
}
