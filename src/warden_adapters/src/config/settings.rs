use ::config::{Config, ConfigError, Environment, File};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::constants::{
    CONFIGURATION_DIRECTORY, DEFAULT_ENVIRONMENT, defaults,
    env::{APP_ENVIRONMENT_ENV_VAR, SETTINGS_ENV_PREFIX, SETTINGS_ENV_SEPARATOR},
};

/// Settings consumed when composing the auth service.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt: JwtSettings,
    #[serde(default)]
    pub hasher: HasherSettings,
    /// Absent means users are kept in memory.
    #[serde(default)]
    pub postgres: Option<PostgresSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    /// Seconds
    #[serde(default = "default_time_to_live")]
    pub time_to_live: i64,
}

/// Argon2 work factor.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HasherSettings {
    pub memory_cost: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HasherSettings {
    fn default() -> Self {
        Self {
            memory_cost: defaults::HASHER_MEMORY_COST_KIB,
            iterations: defaults::HASHER_ITERATIONS,
            parallelism: defaults::HASHER_PARALLELISM,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_time_to_live() -> i64 {
    defaults::TOKEN_TIME_TO_LIVE_SECONDS
}

fn default_max_connections() -> u32 {
    defaults::POSTGRES_MAX_CONNECTIONS
}

impl AuthSettings {
    /// Layered load: `config/base`, then `config/{APP_ENVIRONMENT}`, then
    /// `WARDEN__*` environment variables. A `.env` file is honoured if present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = std::env::var(APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        let config = Config::builder()
            .add_source(File::with_name(&format!("{CONFIGURATION_DIRECTORY}/base")).required(false))
            .add_source(
                File::with_name(&format!("{CONFIGURATION_DIRECTORY}/{environment}"))
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(SETTINGS_ENV_PREFIX)
                    .separator(SETTINGS_ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Self = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.expose_secret().trim().is_empty() {
            return Err(ConfigError::Message("jwt.secret must not be empty".into()));
        }
        if self.jwt.time_to_live <= 0 {
            return Err(ConfigError::Message(
                "jwt.time_to_live must be positive".into(),
            ));
        }
        Ok(())
    }
}
