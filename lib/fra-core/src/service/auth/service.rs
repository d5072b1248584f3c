use time::OffsetDateTime;

use super::AuthService;
use super::dto::{AuthResponseDTO, LoginRequestDTO, RegisterUserRequestDTO, UserResponseDTO};
use super::mapper::{normalize_email, user_from_request};
use super::validator::validate_register_request;
use crate::model::actor::Actor;
use crate::provider::ProviderError;
use crate::repository::error::DataLayerError;
use crate::service::error::{
    AuthenticationError, BusinessLogicError, EntityNotFoundError, ServiceError,
};

impl AuthService {
    /// Creates an account and signs the new user in
    pub async fn register(
        &self,
        request: RegisterUserRequestDTO,
    ) -> Result<AuthResponseDTO, ServiceError> {
        let role = validate_register_request(&request, &self.config)?;

        let hasher = self.password_hasher.clone();
        let password = request.password.to_owned();
        let password_hash = blocking(move || hasher.hash_password(&password)).await?;
        let user = user_from_request(request, role, password_hash, OffsetDateTime::now_utc());

        match self.user_repository.create_user(user.to_owned()).await {
            Ok(_) => {}
            Err(DataLayerError::AlreadyExists) => {
                return Err(BusinessLogicError::EmailAlreadyRegistered.into());
            }
            Err(err) => return Err(err.into()),
        }

        tracing::info!(user_id = %user.id, role = %user.role, "User registered");

        let token = self.token_provider.issue_token(&user)?;
        Ok(AuthResponseDTO {
            token,
            user: user.into(),
        })
    }

    pub async fn login(&self, request: LoginRequestDTO) -> Result<AuthResponseDTO, ServiceError> {
        let user = self
            .user_repository
            .get_user_by_email(&normalize_email(&request.email))
            .await?
            .ok_or(AuthenticationError::InvalidCredentials)?;

        let hasher = self.password_hasher.clone();
        let password_hash = user.password_hash.to_owned();
        let verified =
            blocking(move || hasher.verify_password(&request.password, &password_hash)).await?;
        if !verified {
            return Err(AuthenticationError::InvalidCredentials.into());
        }

        let token = self.token_provider.issue_token(&user)?;
        Ok(AuthResponseDTO {
            token,
            user: user.into(),
        })
    }

    /// Resolves a bearer token to the calling user
    ///
    /// The role is taken from the stored user, not from the token.
    pub async fn authenticate(&self, token: &str) -> Result<Actor, ServiceError> {
        let claims = self.token_provider.verify_token(token).map_err(|error| {
            tracing::debug!(%error, "Token rejected");
            AuthenticationError::InvalidToken
        })?;

        let user = self
            .user_repository
            .get_user(&claims.sub)
            .await?
            .ok_or(AuthenticationError::UnknownUser(claims.sub))?;

        Ok(Actor {
            id: user.id,
            role: user.role,
        })
    }

    pub async fn get_current_user(&self, actor: &Actor) -> Result<UserResponseDTO, ServiceError> {
        let user = self
            .user_repository
            .get_user(&actor.id)
            .await?
            .ok_or(EntityNotFoundError::User(actor.id))?;

        Ok(user.into())
    }
}

/// Runs a password hashing task on the blocking thread pool
async fn blocking<T: Send + 'static>(
    task: impl FnOnce() -> Result<T, ProviderError> + Send + 'static,
) -> Result<T, ServiceError> {
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| ProviderError::BlockingTask(e.to_string()))?
        .map_err(Into::into)
}
