use http::StatusCode;
use warden_auth_service::AuthServiceError;

use crate::helpers::{TestApp, secret};

#[tokio::test]
async fn register_then_login() {
    let app = TestApp::new().await;

    let registered = app
        .service
        .register("new@test.com", "Test User".to_owned(), secret("test123"))
        .await
        .expect("registration succeeds");

    assert!(registered.access_token.is_none());
    assert_eq!(registered.user.email, "new@test.com");
    assert_eq!(registered.user.name, "Test User");

    let logged_in = app
        .service
        .login("new@test.com", secret("test123"))
        .await
        .expect("new user can log in");
    assert!(logged_in.access_token.is_some());
}

#[tokio::test]
async fn register_duplicate_email_leaves_store_unchanged() {
    let app = TestApp::new().await;
    let before = app.user_count().await;

    let error = app
        .service
        .register("user@test.com", "Someone Else".to_owned(), secret("test123"))
        .await
        .unwrap_err();

    assert!(matches!(error, AuthServiceError::UserAlreadyExists(ref email) if email == "user@test.com"));
    assert_eq!(error.status_code(), StatusCode::CONFLICT);
    assert_eq!(app.user_count().await, before);
}

#[tokio::test]
async fn register_rejects_invalid_input() {
    let app = TestApp::new().await;
    let before = app.user_count().await;

    let bad_email = app
        .service
        .register("invalid-email", "Test User".to_owned(), secret("test123"))
        .await
        .unwrap_err();
    let short_password = app
        .service
        .register("new@test.com", "Test User".to_owned(), secret("12345"))
        .await
        .unwrap_err();
    let blank_name = app
        .service
        .register("new@test.com", " ".to_owned(), secret("test123"))
        .await
        .unwrap_err();

    assert!(matches!(bad_email, AuthServiceError::InvalidFormat(_)));
    assert!(matches!(short_password, AuthServiceError::PasswordTooShort(_)));
    assert!(matches!(blank_name, AuthServiceError::InvalidName(_)));
    for error in [bad_email, short_password, blank_name] {
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }
    assert_eq!(app.user_count().await, before);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_registrations_with_same_email() {
    let app = TestApp::new().await;
    let before = app.user_count().await;

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = app.service.clone();
            tokio::spawn(async move {
                service
                    .register("race@test.com", format!("Racer {i}"), secret("test123"))
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        match handle.await.expect("task completes") {
            Ok(_) => successes += 1,
            Err(error) => assert!(matches!(error, AuthServiceError::UserAlreadyExists(_))),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(app.user_count().await, before + 1);
}
