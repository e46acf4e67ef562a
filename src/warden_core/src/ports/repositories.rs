use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, user::User};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Storage for registered users, keyed by email.
///
/// `find_by_email` reports a missing user as `Ok(None)`. `create` must refuse
/// an email that is already stored with `UserAlreadyExists`, even when two
/// calls race.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError>;
    async fn create(&self, user: User) -> Result<User, UserStoreError>;
    async fn find_all(&self) -> Result<Vec<User>, UserStoreError>;
}

#[async_trait]
impl<T: UserStore + ?Sized> UserStore for Arc<T> {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        (**self).find_by_email(email).await
    }

    async fn create(&self, user: User) -> Result<User, UserStoreError> {
        (**self).create(user).await
    }

    async fn find_all(&self) -> Result<Vec<User>, UserStoreError> {
        (**self).find_all().await
    }
}

#[async_trait]
impl<T: UserStore + ?Sized> UserStore for &T {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        (**self).find_by_email(email).await
    }

    async fn create(&self, user: User) -> Result<User, UserStoreError> {
        (**self).create(user).await
    }

    async fn find_all(&self) -> Result<Vec<User>, UserStoreError> {
        (**self).find_all().await
    }
}
