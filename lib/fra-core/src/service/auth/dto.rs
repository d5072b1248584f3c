use one_dto_mapper::From;
use shared_types::UserId;
use time::OffsetDateTime;

use crate::model::user::{Role, User};

#[derive(Clone, Debug)]
pub struct RegisterUserRequestDTO {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Clone, Debug)]
pub struct LoginRequestDTO {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct AuthResponseDTO {
    pub token: String,
    pub user: UserResponseDTO,
}

#[derive(Clone, Debug, Eq, PartialEq, From)]
#[from(User)]
pub struct UserResponseDTO {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_date: OffsetDateTime,
}
