use http::StatusCode;
use secrecy::ExposeSecret;
use warden_auth_service::AuthServiceError;

use crate::helpers::{TestApp, secret};

#[tokio::test]
async fn login_with_seeded_user_returns_verifiable_token() {
    let app = TestApp::new().await;

    let response = app
        .service
        .login("user@test.com", secret("password"))
        .await
        .expect("seeded user can log in");

    assert_eq!(response.user.email, "user@test.com");
    assert_eq!(response.user.name, "Test User");

    let token = response.access_token.expect("login issues a token");
    let claims = app
        .token_service
        .verify_token(token.expose_secret())
        .expect("token is signed with the configured secret");
    assert_eq!(claims.sub, "user@test.com");
    assert_eq!(claims.name, "Test User");
}

#[tokio::test]
async fn unknown_email_and_wrong_password_are_indistinguishable() {
    let app = TestApp::new().await;

    let unknown = app
        .service
        .login("nobody@test.com", secret("password"))
        .await
        .unwrap_err();
    let wrong_password = app
        .service
        .login("user@test.com", secret("not-the-password"))
        .await
        .unwrap_err();

    assert!(matches!(unknown, AuthServiceError::InvalidCredentials));
    assert!(matches!(wrong_password, AuthServiceError::InvalidCredentials));
    assert_eq!(unknown.to_string(), wrong_password.to_string());
    assert_eq!(unknown.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_email_is_reported_as_invalid_credentials() {
    let app = TestApp::new().await;

    let error = app
        .service
        .login("definitely not an email", secret("password"))
        .await
        .unwrap_err();

    assert!(matches!(error, AuthServiceError::InvalidCredentials));
}
