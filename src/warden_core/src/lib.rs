pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    auth_response::{AuthResponse, UserSummary},
    email::{Email, EmailError},
    password::{HashedPassword, MIN_PASSWORD_LENGTH, PasswordError, PlainPassword},
    user::{User, UserError, UserName},
    user_status::{ParseUserStatusError, UserStatus},
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{
        PasswordHasher, PasswordHasherError, TokenPayload, TokenService, TokenServiceError,
    },
};
