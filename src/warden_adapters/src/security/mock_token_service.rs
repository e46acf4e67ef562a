use secrecy::Secret;
use warden_core::{TokenPayload, TokenService, TokenServiceError};

#[derive(Debug, Clone, Default)]
pub struct MockTokenService;

impl MockTokenService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl TokenService for MockTokenService {
    async fn generate_token(
        &self,
        payload: &TokenPayload,
    ) -> Result<Secret<String>, TokenServiceError> {
        Ok(Secret::from(format!("mock-token.{}", payload.email)))
    }
}
