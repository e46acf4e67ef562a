use thiserror::Error;

use super::{email::Email, password::HashedPassword, user_status::UserStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("Name must not be empty")]
    EmptyName,
}

/// Display name of a user. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, UserError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(UserError::EmptyName);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A registered user. The email is the identity; the password is always the
/// hashed form.
#[derive(Debug, Clone)]
pub struct User {
    email: Email,
    name: UserName,
    password: HashedPassword,
    status: UserStatus,
}

impl User {
    pub fn new(email: Email, name: UserName, password: HashedPassword, status: UserStatus) -> Self {
        Self {
            email,
            name,
            password,
            status,
        }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn password(&self) -> &HashedPassword {
        &self.password
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    /// Returns a copy of this user carrying `status`.
    pub fn with_status(&self, status: UserStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}
