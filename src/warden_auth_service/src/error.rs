use http::StatusCode;
use thiserror::Error;
use warden_application::{LoginError, RegisterError, ValidateUserError};

/// Errors returned to the transport layer.
///
/// Credential and input problems map to 4xx. Everything the adapters raise
/// lands in `Infrastructure` and maps to 500, never to a credential error.
#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    InvalidFormat(String),

    #[error("{0}")]
    InvalidName(String),

    #[error("{0}")]
    PasswordTooShort(String),

    #[error("User with email {0} already exists")]
    UserAlreadyExists(String),

    #[error("Unexpected error: {0}")]
    Infrastructure(String),
}

impl AuthServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthServiceError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthServiceError::InvalidFormat(_)
            | AuthServiceError::InvalidName(_)
            | AuthServiceError::PasswordTooShort(_) => StatusCode::BAD_REQUEST,
            AuthServiceError::UserAlreadyExists(_) => StatusCode::CONFLICT,
            AuthServiceError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_infrastructure(&self) -> bool {
        matches!(self, AuthServiceError::Infrastructure(_))
    }
}

impl From<LoginError> for AuthServiceError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => AuthServiceError::InvalidCredentials,
            LoginError::UserStoreError(e) => AuthServiceError::Infrastructure(e.to_string()),
            LoginError::PasswordHasherError(e) => AuthServiceError::Infrastructure(e.to_string()),
            LoginError::TokenServiceError(e) => AuthServiceError::Infrastructure(e.to_string()),
        }
    }
}

impl From<RegisterError> for AuthServiceError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::InvalidFormat(e) => AuthServiceError::InvalidFormat(e.to_string()),
            RegisterError::InvalidName(e) => AuthServiceError::InvalidName(e.to_string()),
            RegisterError::PasswordTooShort(e) => AuthServiceError::PasswordTooShort(e.to_string()),
            RegisterError::UserAlreadyExists(email) => AuthServiceError::UserAlreadyExists(email),
            RegisterError::UserStoreError(e) => AuthServiceError::Infrastructure(e.to_string()),
            RegisterError::PasswordHasherError(e) => {
                AuthServiceError::Infrastructure(e.to_string())
            }
        }
    }
}

impl From<ValidateUserError> for AuthServiceError {
    fn from(error: ValidateUserError) -> Self {
        match error {
            ValidateUserError::UserStoreError(e) => AuthServiceError::Infrastructure(e.to_string()),
        }
    }
}
