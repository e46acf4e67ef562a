use warden_core::{Email, User, UserStore, UserStoreError};

/// Error types for validate user use case
#[derive(Debug, thiserror::Error)]
pub enum ValidateUserError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Validate user use case - plain lookup for session middleware
pub struct ValidateUserUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> ValidateUserUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "ValidateUserUseCase::execute", skip(self))]
    pub async fn execute(&self, email: &Email) -> Result<Option<User>, ValidateUserError> {
        Ok(self.user_store.find_by_email(email).await?)
    }
}
