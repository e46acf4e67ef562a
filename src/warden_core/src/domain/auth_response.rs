use secrecy::Secret;
use serde::Serialize;

use super::user::User;

/// Public projection of a user. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub email: String,
    pub name: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            email: user.email().as_str().to_owned(),
            name: user.name().as_str().to_owned(),
        }
    }
}

/// Result of a successful login or registration.
///
/// `access_token` is `None` after registration: a session is only issued by
/// a subsequent login.
#[derive(Debug, Clone)]
pub struct AuthResponse {
    pub access_token: Option<Secret<String>>,
    pub user: UserSummary,
}
