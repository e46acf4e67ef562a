//! # Warden - Authentication Core
//!
//! Facade crate re-exporting the public API of the workspace members.
//!
//! ## Structure
//!
//! - **Domain types**: `Email`, `PlainPassword`, `HashedPassword`, `UserName`, `UserStatus`, `User`
//! - **Ports**: `UserStore`, `PasswordHasher`, `TokenService`
//! - **Use cases**: `LoginUseCase`, `RegisterUseCase`, `ValidateUserUseCase`
//! - **Adapters**: `HashMapUserStore`, `PostgresUserStore`, `Argon2PasswordHasher`, `JwtTokenService`
//! - **Service**: `AuthService` - the entry point for a transport layer

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use warden_core::*;
}

pub use warden_core::{
    AuthResponse, Email, EmailError, HashedPassword, PasswordError, PlainPassword, User,
    UserError, UserName, UserStatus, UserSummary,
};

// ============================================================================
// Ports
// ============================================================================

pub use warden_core::{
    PasswordHasher, PasswordHasherError, TokenPayload, TokenService, TokenServiceError,
    UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use warden_application::*;
}

pub use warden_application::{
    LoginError, LoginUseCase, RegisterError, RegisterUseCase, ValidateUserError,
    ValidateUserUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use warden_adapters::persistence::*;
    }

    /// Hashing and token implementations
    pub mod security {
        pub use warden_adapters::security::*;
    }

    /// Configuration
    pub mod config {
        pub use warden_adapters::config::*;
    }
}

pub use warden_adapters::{
    Argon2PasswordHasher, HashMapUserStore, JwtTokenService, MockPasswordHasher,
    MockTokenService, PostgresUserStore,
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

pub use warden_auth_service::{AuthService, AuthServiceError, ConfiguredAuthService, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
