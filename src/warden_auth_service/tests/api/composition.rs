use secrecy::Secret;
use warden_adapters::config::{AuthSettings, HasherSettings, JwtSettings};
use warden_auth_service::ConfiguredAuthService;

use crate::helpers::secret;

#[tokio::test]
async fn service_from_settings_without_database() {
    let settings = AuthSettings {
        jwt: JwtSettings {
            secret: Secret::from("composition-secret".to_owned()),
            time_to_live: 600,
        },
        hasher: HasherSettings {
            memory_cost: 1024,
            iterations: 1,
            parallelism: 1,
        },
        postgres: None,
    };

    let service = ConfiguredAuthService::from_settings(&settings)
        .await
        .expect("in-memory service builds");

    service
        .register("new@test.com", "Test User".to_owned(), secret("test123"))
        .await
        .unwrap();
    let response = service
        .login("new@test.com", secret("test123"))
        .await
        .unwrap();

    assert!(response.access_token.is_some());
}

#[tokio::test]
async fn service_from_settings_rejects_bad_work_factor() {
    let settings = AuthSettings {
        jwt: JwtSettings {
            secret: Secret::from("composition-secret".to_owned()),
            time_to_live: 600,
        },
        hasher: HasherSettings {
            memory_cost: 1024,
            iterations: 0,
            parallelism: 1,
        },
        postgres: None,
    };

    assert!(ConfiguredAuthService::from_settings(&settings).await.is_err());
}
