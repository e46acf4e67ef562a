use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use warden_core::{TokenPayload, TokenService, TokenServiceError};

use crate::config::JwtSettings;

/// HS256 signed access tokens.
#[derive(Clone)]
pub struct JwtTokenService {
    secret: Secret<String>,
    token_ttl_in_seconds: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub iat: usize,
    pub exp: usize,
}

impl JwtTokenService {
    pub fn new(secret: Secret<String>, token_ttl_in_seconds: i64) -> Self {
        Self {
            secret,
            token_ttl_in_seconds,
        }
    }

    pub fn from_settings(settings: &JwtSettings) -> Self {
        Self::new(settings.secret.clone(), settings.time_to_live)
    }

    /// Checks signature and expiry of a token issued by `generate_token`.
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenServiceError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "Rejected access token");
            TokenServiceError::InvalidToken
        })
    }

    fn claims_for(&self, payload: &TokenPayload) -> Result<Claims, TokenServiceError> {
        let delta = chrono::Duration::try_seconds(self.token_ttl_in_seconds).ok_or(
            TokenServiceError::UnexpectedError("Failed to create auth token duration".to_string()),
        )?;

        let now = Utc::now();
        let exp = now
            .checked_add_signed(delta)
            .ok_or(TokenServiceError::UnexpectedError(
                "Duration out of range".to_string(),
            ))?
            .timestamp();

        Ok(Claims {
            sub: payload.email.as_str().to_owned(),
            name: payload.name.as_str().to_owned(),
            iat: to_usize(now.timestamp())?,
            exp: to_usize(exp)?,
        })
    }
}

fn to_usize(timestamp: i64) -> Result<usize, TokenServiceError> {
    timestamp
        .try_into()
        .map_err(|_| TokenServiceError::UnexpectedError("Failed to cast i64 to usize".to_string()))
}

#[async_trait::async_trait]
impl TokenService for JwtTokenService {
    #[tracing::instrument(name = "Generating JWT", skip_all)]
    async fn generate_token(
        &self,
        payload: &TokenPayload,
    ) -> Result<Secret<String>, TokenServiceError> {
        let claims = self.claims_for(payload)?;

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.expose_secret().as_bytes()),
        )
        .map(Secret::from)
        .map_err(|e| TokenServiceError::TokenError(e.to_string()))
    }
}
