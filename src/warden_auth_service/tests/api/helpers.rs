use std::sync::Arc;

use secrecy::Secret;
use warden_adapters::{
    Argon2PasswordHasher, HashMapUserStore, JwtTokenService, fixtures::seeded_user_store,
};
use warden_auth_service::{AuthService, init_tracing};
use warden_core::UserStore;

pub const JWT_SECRET: &str = "integration-test-secret";

pub type TestService = AuthService<HashMapUserStore, Argon2PasswordHasher, JwtTokenService>;

pub struct TestApp {
    pub service: Arc<TestService>,
    pub token_service: JwtTokenService,
}

impl TestApp {
    pub async fn new() -> Self {
        if std::env::var("TEST_LOG").is_ok() {
            let _ = init_tracing();
        }

        // cheap work factor keeps the suite fast
        let hasher = Argon2PasswordHasher::new(1024, 1, 1).expect("valid argon2 params");
        let user_store = seeded_user_store(&hasher)
            .await
            .expect("Failed to seed user store");
        let token_service = JwtTokenService::new(Secret::from(JWT_SECRET.to_owned()), 86_400);

        let service = AuthService::new(user_store, hasher, token_service.clone());

        Self {
            service: Arc::new(service),
            token_service,
        }
    }

    pub async fn user_count(&self) -> usize {
        self.service
            .user_store()
            .find_all()
            .await
            .expect("Failed to list users")
            .len()
    }
}

pub fn secret(value: &str) -> Secret<String> {
    Secret::from(value.to_owned())
}
