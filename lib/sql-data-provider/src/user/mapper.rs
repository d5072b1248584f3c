use fra_core::model::user::User;
use sea_orm::Set;

use crate::entity::user;

impl From<User> for user::ActiveModel {
    fn from(value: User) -> Self {
        Self {
            id: Set(value.id),
            email: Set(value.email),
            password_hash: Set(value.password_hash),
            full_name: Set(value.full_name),
            role: Set(value.role.into()),
            phone: Set(value.phone),
            address: Set(value.address),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
        }
    }
}
