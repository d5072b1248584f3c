use fra_core::model::user::Role;
use fra_core::service::auth::dto::{
    AuthResponseDTO, LoginRequestDTO, RegisterUserRequestDTO, UserResponseDTO,
};
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use shared_types::UserId;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::serialize::front_time;

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(deny_unknown_fields)]
#[into(RegisterUserRequestDTO)]
pub(crate) struct RegisterUserRequestRestDTO {
    #[schema(example = "ravi@example.org")]
    pub email: String,
    #[schema(example = "s3cure-pass")]
    pub password: String,
    #[schema(example = "Ravi Kumar")]
    pub full_name: String,
    /// One of `Community User`, `NGO`, `District Officer`, `Ministry`
    #[schema(example = "Community User")]
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(deny_unknown_fields)]
#[into(LoginRequestDTO)]
pub(crate) struct LoginRequestRestDTO {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(AuthResponseDTO)]
pub(crate) struct AuthResponseRestDTO {
    /// Bearer token for subsequent requests
    pub token: String,
    pub user: UserResponseRestDTO,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(UserResponseDTO)]
pub(crate) struct UserResponseRestDTO {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub role: RoleRestEnum,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "created_at", serialize_with = "front_time")]
    #[schema(example = "2024-03-01T10:15:00.000Z")]
    pub created_date: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From)]
#[from(Role)]
pub(crate) enum RoleRestEnum {
    #[serde(rename = "Community User")]
    CommunityUser,
    #[serde(rename = "NGO")]
    Ngo,
    #[serde(rename = "District Officer")]
    DistrictOfficer,
    #[serde(rename = "Ministry")]
    Ministry,
}
