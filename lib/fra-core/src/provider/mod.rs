use thiserror::Error;

pub mod document_storage;
pub mod insight;
pub mod password;
pub mod token;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Password hashing error: `{0}`")]
    PasswordHash(String),

    #[error("Token error: `{0}`")]
    Token(String),

    #[error("Blocking task failed: `{0}`")]
    BlockingTask(String),
}
