//! Test fixtures. Compiled only for tests or with the `test-fixtures` feature.

use secrecy::Secret;
use thiserror::Error;
use warden_core::{
    Email, EmailError, PasswordError, PasswordHasher, PasswordHasherError, PlainPassword, User,
    UserError, UserName, UserStatus, UserStore, UserStoreError,
};

use crate::persistence::HashMapUserStore;

/// Demo accounts as `(email, name, password)`.
pub const SEED_USERS: [(&str, &str, &str); 3] = [
    ("admin@example.com", "Administrator", "123456"),
    ("user@test.com", "Test User", "password"),
    ("demo@demo.com", "Demo User", "demo123"),
];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Email(#[from] EmailError),
    #[error(transparent)]
    Name(#[from] UserError),
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error(transparent)]
    Hasher(#[from] PasswordHasherError),
    #[error(transparent)]
    Store(#[from] UserStoreError),
}

/// In-memory store pre-populated with `SEED_USERS`, hashed with `hasher`.
pub async fn seeded_user_store<H: PasswordHasher>(
    hasher: &H,
) -> Result<HashMapUserStore, SeedError> {
    let store = HashMapUserStore::new();

    for (email, name, password) in SEED_USERS {
        let password = PlainPassword::parse(Secret::from(password.to_owned()))?;
        let user = User::new(
            Email::parse(email)?,
            UserName::parse(name)?,
            hasher.hash(&password).await?,
            UserStatus::Active,
        );
        store.create(user).await?;
    }

    Ok(store)
}
