use argon2::{
    Algorithm, Argon2, Params, PasswordHash, Version,
    password_hash::{self, PasswordHasher as _, PasswordVerifier as _, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};
use warden_core::{HashedPassword, PasswordHasher, PasswordHasherError, PlainPassword};

use crate::config::HasherSettings;

/// Argon2id hasher producing PHC strings.
///
/// Hashing and verification are CPU bound and run on the blocking pool.
#[derive(Debug, Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    /// `memory_cost` is in KiB.
    pub fn new(
        memory_cost: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordHasherError> {
        let params = Params::new(memory_cost, iterations, parallelism, None)
            .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;
        Ok(Self { params })
    }

    pub fn from_settings(settings: &HasherSettings) -> Result<Self, PasswordHasherError> {
        Self::new(
            settings.memory_cost,
            settings.iterations,
            settings.parallelism,
        )
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &PlainPassword) -> Result<HashedPassword, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let hasher = self.argon2();
        let password = password.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                hasher
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| HashedPassword::from_hash(Secret::from(h.to_string())))
                    .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn compare(
        &self,
        candidate: &Secret<String>,
        hashed: &HashedPassword,
    ) -> Result<bool, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let verifier = self.argon2();
        let candidate = candidate.clone();
        let hashed = hashed.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_password_hash = PasswordHash::new(hashed.as_ref().expose_secret())
                    .map_err(|e| PasswordHasherError::MalformedHash(e.to_string()))?;

                // the digest comparison inside verify_password is constant time
                match verifier
                    .verify_password(candidate.expose_secret().as_bytes(), &expected_password_hash)
                {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordHasherError::UnexpectedError(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }
}
