use std::sync::Arc;

use crate::config::core_config::AuthConfig;
use crate::provider::password::PasswordHasher;
use crate::provider::token::TokenProvider;
use crate::repository::user_repository::UserRepository;

pub mod dto;
mod mapper;
pub mod service;
mod validator;

#[derive(Clone)]
pub struct AuthService {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
    config: Arc<AuthConfig>,
}

impl AuthService {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_provider,
            config,
        }
    }
}
