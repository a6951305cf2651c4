use crate::error::{AppError, Result};
use sqlx::postgres::PgConnectOptions;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_var("PORT", "3001")?,
                max_body_size: parse_var("MAX_BODY_SIZE", "10485760")?,
            },
            database: DatabaseConfig {
                host: env::var("DATABASE_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: parse_var("DATABASE_PORT", "5432")?,
                user: required_var("DATABASE_USER")?,
                password: required_var("DATABASE_PASSWORD")?,
                name: required_var("DATABASE_NAME")?,
                max_connections: parse_var("DB_MAX_CONNECTIONS", "20")?,
            },
            cors: CorsConfig {
                allowed_origin: env::var("FRONTEND_URL")
                    .map(|s| s.trim().to_string())
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl DatabaseConfig {
    /// Assembles the individual settings into a single connection descriptor.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

fn required_var(key: &str) -> Result<String> {
    env::var(key).map_err(|_| AppError::ConfigError(format!("{} not set", key)))
}

fn parse_var<T: std::str::FromStr>(key: &str, default: &str) -> Result<T> {
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| AppError::ConfigError(format!("Invalid {} value", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DatabaseConfig {
        DatabaseConfig {
            host: "db.internal".to_string(),
            port: 6543,
            user: "market".to_string(),
            password: "secret".to_string(),
            name: "market_db".to_string(),
            max_connections: 5,
        }
    }

    #[test]
    fn connect_options_carry_every_setting() {
        let options = sample().connect_options();

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "market");
        assert_eq!(options.get_database(), Some("market_db"));
    }

    #[test]
    fn server_address_joins_host_and_port() {
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3001,
                max_body_size: 1024,
            },
            database: sample(),
            cors: CorsConfig {
                allowed_origin: "http://localhost:3000".to_string(),
            },
        };

        assert_eq!(config.server_address(), "127.0.0.1:3001");
    }

    #[test]
    fn missing_variable_is_a_config_error() {
        let err = required_var("MARKET_BACKEND_TEST_UNSET_VARIABLE").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(ref msg) if msg.contains("not set")));
    }

    #[test]
    fn unparsable_default_is_a_config_error() {
        let err = parse_var::<u16>("MARKET_BACKEND_TEST_UNSET_PORT", "not-a-port").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
