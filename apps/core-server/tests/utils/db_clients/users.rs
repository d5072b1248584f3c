use std::sync::Arc;

use fra_core::model::user::User;
use fra_core::repository::user_repository::UserRepository;

pub struct UsersDB {
    repository: Arc<dyn UserRepository>,
}

impl UsersDB {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_by_email(&self, email: &str) -> Option<User> {
        self.repository.get_user_by_email(email).await.unwrap()
    }
}
