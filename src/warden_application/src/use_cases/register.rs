use secrecy::Secret;
use warden_core::{
    AuthResponse, Email, EmailError, PasswordError, PasswordHasher, PasswordHasherError,
    PlainPassword, User, UserError, UserName, UserStatus, UserStore, UserStoreError, UserSummary,
};

/// Error types for register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("{0}")]
    InvalidFormat(#[from] EmailError),
    #[error("{0}")]
    InvalidName(#[from] UserError),
    #[error("{0}")]
    PasswordTooShort(#[from] PasswordError),
    #[error("User with email {0} already exists")]
    UserAlreadyExists(String),
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

/// Register use case - creates a new active user
pub struct RegisterUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: U,
    password_hasher: H,
}

impl<U, H> RegisterUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: U, password_hasher: H) -> Self {
        Self {
            user_store,
            password_hasher,
        }
    }

    /// Execute the register use case
    ///
    /// The password is hashed only once the email is known to be free.
    /// Registration never issues a token; the returned `access_token` is
    /// always `None`.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, name, password))]
    pub async fn execute(
        &self,
        email: &str,
        name: String,
        password: Secret<String>,
    ) -> Result<AuthResponse, RegisterError> {
        let email = Email::parse(email)?;
        let name = UserName::parse(name)?;

        if self
            .user_store
            .find_by_email(&email)
            .await
            .map_err(RegisterError::UserStoreError)?
            .is_some()
        {
            return Err(RegisterError::UserAlreadyExists(email.to_string()));
        }

        let password = PlainPassword::parse(password)?;
        let hashed_password = self.password_hasher.hash(&password).await?;

        let user = User::new(email.clone(), name, hashed_password, UserStatus::default());

        // a concurrent registration may have won the race since the lookup
        let saved = self.user_store.create(user).await.map_err(|e| match e {
            UserStoreError::UserAlreadyExists => RegisterError::UserAlreadyExists(email.to_string()),
            other => RegisterError::UserStoreError(other),
        })?;

        tracing::info!("User registered");

        Ok(AuthResponse {
            access_token: None,
            user: UserSummary::from(&saved),
        })
    }
}
