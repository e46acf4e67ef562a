use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use secrecy::{ExposeSecret, Secret};
use warden_core::{HashedPassword, PasswordHasher, PasswordHasherError, PlainPassword};

const MOCK_HASH_PREFIX: &str = "mock$";

/// Fast stand-in for `Argon2PasswordHasher`.
///
/// Not one-way: the hash embeds the plaintext. Each call still gets its own
/// salt, so two hashes of the same password differ.
#[derive(Debug, Clone, Default)]
pub struct MockPasswordHasher {
    salt: Arc<AtomicU64>,
}

impl MockPasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &PlainPassword) -> Result<HashedPassword, PasswordHasherError> {
        let salt = self.salt.fetch_add(1, Ordering::Relaxed);
        Ok(HashedPassword::from_hash(Secret::from(format!(
            "{MOCK_HASH_PREFIX}{salt}${}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn compare(
        &self,
        candidate: &Secret<String>,
        hashed: &HashedPassword,
    ) -> Result<bool, PasswordHasherError> {
        let plain = hashed
            .as_ref()
            .expose_secret()
            .strip_prefix(MOCK_HASH_PREFIX)
            .and_then(|rest| rest.split_once('$'))
            .map(|(_, plain)| plain)
            .ok_or_else(|| PasswordHasherError::MalformedHash("not a mock hash".to_owned()))?;

        Ok(plain == candidate.expose_secret())
    }
}
