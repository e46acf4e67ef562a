use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use warden_core::{
    Email, HashedPassword, PasswordHasher, PasswordHasherError, PlainPassword, TokenPayload,
    TokenService, TokenServiceError, User, UserName, UserStatus, UserStore, UserStoreError,
};

#[derive(Clone, Default)]
pub struct MockUserStore {
    users: Arc<RwLock<HashMap<Email, User>>>,
    pub find_calls: Arc<AtomicUsize>,
    pub create_calls: Arc<AtomicUsize>,
}

impl MockUserStore {
    pub async fn with_user(email: &str, name: &str, password: &str, status: UserStatus) -> Self {
        let store = Self::default();
        let user = User::new(
            Email::parse(email).unwrap(),
            UserName::parse(name).unwrap(),
            HashedPassword::from_hash(Secret::from(format!("hashed:seed:{password}"))),
            status,
        );
        store
            .users
            .write()
            .await
            .insert(user.email().clone(), user);
        store
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn create(&self, user: User) -> Result<User, UserStoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.write().await;
        if users.contains_key(user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.email().clone(), user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, UserStoreError> {
        Ok(self.users.read().await.values().cloned().collect())
    }
}

/// Store whose backend is always down.
#[derive(Clone, Default)]
pub struct UnavailableUserStore;

#[async_trait::async_trait]
impl UserStore for UnavailableUserStore {
    async fn find_by_email(&self, _email: &Email) -> Result<Option<User>, UserStoreError> {
        Err(UserStoreError::UnexpectedError("connection refused".to_owned()))
    }

    async fn create(&self, _user: User) -> Result<User, UserStoreError> {
        Err(UserStoreError::UnexpectedError("connection refused".to_owned()))
    }

    async fn find_all(&self) -> Result<Vec<User>, UserStoreError> {
        Err(UserStoreError::UnexpectedError("connection refused".to_owned()))
    }
}

/// Store that never sees the user on lookup but always loses the insert,
/// as when another registration commits in between.
#[derive(Clone, Default)]
pub struct RacingUserStore {
    pub create_calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl UserStore for RacingUserStore {
    async fn find_by_email(&self, _email: &Email) -> Result<Option<User>, UserStoreError> {
        Ok(None)
    }

    async fn create(&self, _user: User) -> Result<User, UserStoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        Err(UserStoreError::UserAlreadyExists)
    }

    async fn find_all(&self) -> Result<Vec<User>, UserStoreError> {
        Ok(Vec::new())
    }
}

#[derive(Clone, Default)]
pub struct MockPasswordHasher {
    pub hash_calls: Arc<AtomicUsize>,
    pub compare_calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &PlainPassword) -> Result<HashedPassword, PasswordHasherError> {
        let salt = self.hash_calls.fetch_add(1, Ordering::SeqCst);
        Ok(HashedPassword::from_hash(Secret::from(format!(
            "hashed:{salt}:{}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn compare(
        &self,
        candidate: &Secret<String>,
        hashed: &HashedPassword,
    ) -> Result<bool, PasswordHasherError> {
        self.compare_calls.fetch_add(1, Ordering::SeqCst);
        let plain = hashed.as_ref().expose_secret().splitn(3, ':').nth(2);
        Ok(plain == Some(candidate.expose_secret().as_str()))
    }
}

#[derive(Clone, Default)]
pub struct MockTokenService {
    pub calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl TokenService for MockTokenService {
    async fn generate_token(
        &self,
        payload: &TokenPayload,
    ) -> Result<Secret<String>, TokenServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Secret::from(format!("token-for-{}", payload.email)))
    }
}

pub fn calls(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
