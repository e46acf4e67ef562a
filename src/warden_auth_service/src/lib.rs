mod auth_service;
mod error;
pub mod telemetry;

pub use auth_service::{AuthService, ConfiguredAuthService};
pub use error::AuthServiceError;
pub use telemetry::init_tracing;
