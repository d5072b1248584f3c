use shared_types::UserId;

use super::error::DataLayerError;
use crate::model::user::User;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with [`DataLayerError::AlreadyExists`] on a duplicate email
    async fn create_user(&self, request: User) -> Result<UserId, DataLayerError>;

    async fn get_user(&self, id: &UserId) -> Result<Option<User>, DataLayerError>;

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DataLayerError>;
}
