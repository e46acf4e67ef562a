pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const SETTINGS_ENV_PREFIX: &str = "WARDEN";
    pub const SETTINGS_ENV_SEPARATOR: &str = "__";
}

pub const CONFIGURATION_DIRECTORY: &str = "config";
pub const DEFAULT_ENVIRONMENT: &str = "local";

pub mod defaults {
    /// 24 hours
    pub const TOKEN_TIME_TO_LIVE_SECONDS: i64 = 86_400;

    pub const HASHER_MEMORY_COST_KIB: u32 = 15_000;
    pub const HASHER_ITERATIONS: u32 = 2;
    pub const HASHER_PARALLELISM: u32 = 1;

    pub const POSTGRES_MAX_CONNECTIONS: u32 = 5;
}
