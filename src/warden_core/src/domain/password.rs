use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password must be at least 6 characters")]
    TooShort,
}

/// A plaintext password that satisfies the length policy.
///
/// Only exists between request parsing and hashing. It is the sole input
/// accepted by `PasswordHasher::hash`, so an already hashed value can never be
/// hashed a second time.
#[derive(Clone)]
pub struct PlainPassword(Secret<String>);

impl PlainPassword {
    pub fn parse(raw: Secret<String>) -> Result<Self, PasswordError> {
        Self::try_from(raw)
    }
}

impl TryFrom<Secret<String>> for PlainPassword {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PasswordError::TooShort);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for PlainPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl std::fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PlainPassword([REDACTED])")
    }
}

/// A password hash as produced by a `PasswordHasher` or loaded from storage.
///
/// No policy is applied: the format belongs to the hasher that produced it.
#[derive(Clone)]
pub struct HashedPassword(Secret<String>);

impl HashedPassword {
    pub fn from_hash(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl AsRef<Secret<String>> for HashedPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl std::fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HashedPassword([REDACTED])")
    }
}
