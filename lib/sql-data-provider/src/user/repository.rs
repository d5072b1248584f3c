use autometrics::autometrics;
use fra_core::model::user::User;
use fra_core::repository::error::DataLayerError;
use fra_core::repository::user_repository::UserRepository;
use one_dto_mapper::convert_inner;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use shared_types::UserId;

use super::UserProvider;
use crate::entity::user;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl UserRepository for UserProvider {
    async fn create_user(&self, request: User) -> Result<UserId, DataLayerError> {
        let user = user::Entity::insert(user::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(user.last_insert_id)
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<User>, DataLayerError> {
        let user = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(user))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DataLayerError> {
        let user = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(user))
    }
}
