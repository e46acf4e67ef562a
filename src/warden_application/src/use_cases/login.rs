use secrecy::Secret;
use warden_core::{
    AuthResponse, Email, PasswordHasher, PasswordHasherError, TokenPayload, TokenService,
    TokenServiceError, UserStore, UserStoreError, UserSummary,
};

/// Error types specific to login use case
///
/// Every credential problem collapses into `InvalidCredentials` so a caller
/// cannot tell an unknown email from a wrong password. The remaining variants
/// are infrastructure failures.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
    #[error("Token service error: {0}")]
    TokenServiceError(#[from] TokenServiceError),
}

/// Login use case - verifies credentials and issues an access token
pub struct LoginUseCase<U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenService,
{
    user_store: U,
    password_hasher: H,
    token_service: T,
}

impl<U, H, T> LoginUseCase<U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenService,
{
    pub fn new(user_store: U, password_hasher: H, token_service: T) -> Self {
        Self {
            user_store,
            password_hasher,
            token_service,
        }
    }

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `email` - Raw email as submitted
    /// * `password` - Raw password as submitted
    ///
    /// # Returns
    /// An `AuthResponse` holding the access token and the public user fields
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: &str,
        password: Secret<String>,
    ) -> Result<AuthResponse, LoginError> {
        let Ok(email) = Email::parse(email) else {
            return Err(reject());
        };

        let Some(user) = self.user_store.find_by_email(&email).await? else {
            return Err(reject());
        };

        let matches = self
            .password_hasher
            .compare(&password, user.password())
            .await?;

        if !matches {
            return Err(reject());
        }

        let payload = TokenPayload {
            email: user.email().clone(),
            name: user.name().clone(),
        };
        let access_token = self.token_service.generate_token(&payload).await?;

        tracing::info!("Login succeeded");

        Ok(AuthResponse {
            access_token: Some(access_token),
            user: UserSummary::from(&user),
        })
    }
}

fn reject() -> LoginError {
    tracing::debug!("Login rejected");
    LoginError::InvalidCredentials
}
