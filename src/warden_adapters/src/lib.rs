pub mod config;
pub mod persistence;
pub mod security;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

pub use persistence::{HashMapUserStore, PostgresUserStore};
pub use security::{
    Argon2PasswordHasher, Claims, JwtTokenService, MockPasswordHasher, MockTokenService,
};
