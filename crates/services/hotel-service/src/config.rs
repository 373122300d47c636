//! Hotel service configuration.

use std::env;

use common::DatabaseConfig;

/// Hotel service configuration.
#[derive(Clone)]
pub struct HotelServiceConfig {
    /// Database pool settings
    pub database: DatabaseConfig,
}

// Connection strings can carry credentials
impl std::fmt::Debug for HotelServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotelServiceConfig")
            .field("database_url", &"[REDACTED]")
            .field("max_connections", &self.database.max_connections)
            .field("min_connections", &self.database.min_connections)
            .finish()
    }
}

impl HotelServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();
        Self {
            database: DatabaseConfig {
                url: env::var("HOTEL_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_connections),
                connect_timeout_secs: env::var("DATABASE_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.connect_timeout_secs),
                sql_logging: env::var("DATABASE_SQL_LOGGING")
                    .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                    .unwrap_or(false),
            },
        }
    }
}
