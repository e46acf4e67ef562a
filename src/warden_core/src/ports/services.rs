use std::sync::Arc;

use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{
    email::Email,
    password::{HashedPassword, PlainPassword},
    user::UserName,
};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Malformed password hash: {0}")]
    MalformedHash(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// One-way, salted password hashing.
///
/// `hash` must not be deterministic: hashing the same password twice yields
/// two different values. A wrong candidate is `Ok(false)`, never an error.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &PlainPassword) -> Result<HashedPassword, PasswordHasherError>;
    async fn compare(
        &self,
        candidate: &Secret<String>,
        hashed: &HashedPassword,
    ) -> Result<bool, PasswordHasherError>;
}

#[async_trait]
impl<T: PasswordHasher + ?Sized> PasswordHasher for Arc<T> {
    async fn hash(&self, password: &PlainPassword) -> Result<HashedPassword, PasswordHasherError> {
        (**self).hash(password).await
    }

    async fn compare(
        &self,
        candidate: &Secret<String>,
        hashed: &HashedPassword,
    ) -> Result<bool, PasswordHasherError> {
        (**self).compare(candidate, hashed).await
    }
}

#[async_trait]
impl<T: PasswordHasher + ?Sized> PasswordHasher for &T {
    async fn hash(&self, password: &PlainPassword) -> Result<HashedPassword, PasswordHasherError> {
        (**self).hash(password).await
    }

    async fn compare(
        &self,
        candidate: &Secret<String>,
        hashed: &HashedPassword,
    ) -> Result<bool, PasswordHasherError> {
        (**self).compare(candidate, hashed).await
    }
}

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    pub email: Email,
    pub name: UserName,
}

#[derive(Debug, Error)]
pub enum TokenServiceError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token error: {0}")]
    TokenError(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Issues signed access tokens that expire.
#[async_trait]
pub trait TokenService: Send + Sync {
    async fn generate_token(
        &self,
        payload: &TokenPayload,
    ) -> Result<Secret<String>, TokenServiceError>;
}

#[async_trait]
impl<T: TokenService + ?Sized> TokenService for Arc<T> {
    async fn generate_token(
        &self,
        payload: &TokenPayload,
    ) -> Result<Secret<String>, TokenServiceError> {
        (**self).generate_token(payload).await
    }
}

#[async_trait]
impl<T: TokenService + ?Sized> TokenService for &T {
    async fn generate_token(
        &self,
        payload: &TokenPayload,
    ) -> Result<Secret<String>, TokenServiceError> {
        (**self).generate_token(payload).await
    }
}
