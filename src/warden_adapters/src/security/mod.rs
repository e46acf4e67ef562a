pub mod argon2_password_hasher;
pub mod jwt_token_service;
pub mod mock_password_hasher;
pub mod mock_token_service;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use jwt_token_service::{Claims, JwtTokenService};
pub use mock_password_hasher::MockPasswordHasher;
pub use mock_token_service::MockTokenService;
