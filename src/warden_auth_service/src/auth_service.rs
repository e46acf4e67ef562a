use std::sync::Arc;

use color_eyre::eyre::Result;
use secrecy::{ExposeSecret, Secret};
use warden_adapters::{
    Argon2PasswordHasher, HashMapUserStore, JwtTokenService, PostgresUserStore,
    config::AuthSettings,
    persistence::{get_postgres_pool, run_migrations},
};
use warden_application::{LoginUseCase, RegisterUseCase, ValidateUserUseCase};
use warden_core::{AuthResponse, Email, PasswordHasher, TokenService, User, UserStore};

use crate::error::AuthServiceError;

/// Service assembled from `AuthSettings`.
pub type ConfiguredAuthService =
    AuthService<Arc<dyn UserStore>, Argon2PasswordHasher, JwtTokenService>;

/// Entry point for the transport layer: login, register and user validation
/// over one set of adapters.
#[derive(Clone)]
pub struct AuthService<U, H, T> {
    user_store: U,
    password_hasher: H,
    token_service: T,
}

impl<U, H, T> AuthService<U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenService,
{
    /// Create a new AuthService with the provided adapters
    ///
    /// # Arguments
    /// * `user_store` - Store for user data
    /// * `password_hasher` - Hasher used at registration and login
    /// * `token_service` - Issues access tokens on login
    pub fn new(user_store: U, password_hasher: H, token_service: T) -> Self {
        Self {
            user_store,
            password_hasher,
            token_service,
        }
    }

    /// Maps to 200 on success and 401 for every credential failure.
    pub async fn login(
        &self,
        email: &str,
        password: Secret<String>,
    ) -> Result<AuthResponse, AuthServiceError> {
        LoginUseCase::new(
            &self.user_store,
            &self.password_hasher,
            &self.token_service,
        )
        .execute(email, password)
        .await
        .map_err(|e| report(e.into()))
    }

    pub async fn register(
        &self,
        email: &str,
        name: String,
        password: Secret<String>,
    ) -> Result<AuthResponse, AuthServiceError> {
        RegisterUseCase::new(&self.user_store, &self.password_hasher)
            .execute(email, name, password)
            .await
            .map_err(|e| report(e.into()))
    }

    /// A malformed email cannot belong to anyone, so it yields `None`.
    pub async fn validate_user(&self, email: &str) -> Result<Option<User>, AuthServiceError> {
        let Ok(email) = Email::parse(email) else {
            return Ok(None);
        };

        ValidateUserUseCase::new(&self.user_store)
            .execute(&email)
            .await
            .map_err(|e| report(e.into()))
    }

    pub fn user_store(&self) -> &U {
        &self.user_store
    }
}

impl ConfiguredAuthService {
    /// Build the production service: Argon2 hashing, JWT tokens and either
    /// PostgreSQL (migrated on start) or an in-memory store when no database
    /// is configured.
    pub async fn from_settings(settings: &AuthSettings) -> Result<Self> {
        let user_store: Arc<dyn UserStore> = match &settings.postgres {
            Some(postgres) => {
                let pool =
                    get_postgres_pool(postgres.url.expose_secret(), postgres.max_connections)
                        .await?;
                run_migrations(&pool).await?;
                tracing::info!("Using PostgreSQL user store");
                Arc::new(PostgresUserStore::new(pool))
            }
            None => {
                tracing::warn!("No database configured, users are kept in memory");
                Arc::new(HashMapUserStore::new())
            }
        };

        let password_hasher = Argon2PasswordHasher::from_settings(&settings.hasher)?;
        let token_service = JwtTokenService::from_settings(&settings.jwt);

        Ok(Self::new(user_store, password_hasher, token_service))
    }
}

fn report(error: AuthServiceError) -> AuthServiceError {
    if error.is_infrastructure() {
        tracing::error!(error = %error, "Auth request failed");
    }
    error
}
