//! HS256 bearer tokens.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use shared_types::UserId;
use time::OffsetDateTime;

use super::ProviderError;
use crate::model::user::{Role, User};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: UserId,
    pub email: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait TokenProvider: Send + Sync {
    fn issue_token(&self, user: &User) -> Result<String, ProviderError>;

    /// Checks signature and expiry
    fn verify_token(&self, token: &str) -> Result<TokenClaims, ProviderError>;
}

pub struct JwtTokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: time::Duration,
}

impl JwtTokenProvider {
    pub fn new(secret: &SecretString, lifetime: time::Duration) -> Self {
        let secret = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            lifetime,
        }
    }
}

impl TokenProvider for JwtTokenProvider {
    fn issue_token(&self, user: &User) -> Result<String, ProviderError> {
        let now = OffsetDateTime::now_utc();
        let claims = TokenClaims {
            sub: user.id,
            email: user.email.to_owned(),
            role: user.role,
            iat: now.unix_timestamp(),
            exp: (now + self.lifetime).unix_timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ProviderError::Token(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, ProviderError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| ProviderError::Token(e.to_string()))
    }
}
