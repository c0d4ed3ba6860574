//! User service configuration.

use std::env;
use std::str::FromStr;

use common::{DatabaseConfig, ServiceConfig};

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Bind address and service name
    pub service: ServiceConfig,
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let service_defaults = ServiceConfig::default();
        let database_defaults = DatabaseConfig::default();

        Self {
            service: ServiceConfig {
                host: env::var("USER_SERVICE_HOST").unwrap_or(service_defaults.host),
                port: parse_or(env::var("USER_SERVICE_PORT").ok(), service_defaults.port),
                ..service_defaults
            },
            database: DatabaseConfig {
                url: env::var("USER_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(database_defaults.url),
                max_connections: parse_or(
                    env::var("USER_SERVICE_DB_MAX_CONNECTIONS").ok(),
                    database_defaults.max_connections,
                ),
                min_connections: parse_or(
                    env::var("USER_SERVICE_DB_MIN_CONNECTIONS").ok(),
                    database_defaults.min_connections,
                ),
            },
        }
    }

    /// Override the bind address with CLI flags, where given.
    pub fn with_bind(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.service.host = host;
        }
        if let Some(port) = port {
            self.service.port = port;
        }
        self
    }
}

/// Parse an optional raw value, falling back to `default` when absent or malformed.
fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or() {
        assert_eq!(parse_or(Some("8080".to_string()), 3000u16), 8080);
        assert_eq!(parse_or(Some("nope".to_string()), 3000u16), 3000);
        assert_eq!(parse_or::<u16>(None, 3000), 3000);
    }

    #[test]
    fn test_with_bind() {
        let config =
            UserServiceConfig::default().with_bind(Some("127.0.0.1".to_string()), Some(9000));
        assert_eq!(config.service.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_with_bind_keeps_unset_values() {
        let config = UserServiceConfig::default().with_bind(None, Some(8081));
        assert_eq!(config.service.bind_addr(), "0.0.0.0:8081");

        let config = UserServiceConfig::default().with_bind(None, None);
        assert_eq!(config.service.bind_addr(), "0.0.0.0:3000");
    }
}
