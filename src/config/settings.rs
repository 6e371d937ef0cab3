//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use super::constants::{
    DEFAULT_APP_ENV, DEFAULT_DB_HOST, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_DB_MIN_CONNECTIONS,
    DEFAULT_DB_NAME, DEFAULT_DB_PASSWORD, DEFAULT_DB_PORT, DEFAULT_DB_SSLMODE, DEFAULT_DB_USER,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    pub app_env: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("app_env", &self.app_env)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured when present.
    /// `DATABASE_URL` wins over the individual `DB_*` variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            postgres_url(
                &env_or("DB_HOST", DEFAULT_DB_HOST),
                env_parse("DB_PORT", DEFAULT_DB_PORT),
                &env_or("DB_USER", DEFAULT_DB_USER),
                &env_or("DB_PASSWORD", DEFAULT_DB_PASSWORD),
                &env_or("DB_NAME", DEFAULT_DB_NAME),
                &env_or("DB_SSLMODE", DEFAULT_DB_SSLMODE),
            )
        });

        Self {
            database_url,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            db_min_connections: env_parse("DB_MIN_CONNECTIONS", DEFAULT_DB_MIN_CONNECTIONS),
            server_host: env_or("SERVER_HOST", DEFAULT_SERVER_HOST),
            server_port: env_parse("SERVER_PORT", DEFAULT_SERVER_PORT),
            app_env: env_or("APP_ENV", DEFAULT_APP_ENV),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Build a Postgres connection URL from its parts.
fn postgres_url(
    host: &str,
    port: u16,
    user: &str,
    password: &str,
    db_name: &str,
    ssl_mode: &str,
) -> String {
    format!("postgres://{user}:{password}@{host}:{port}/{db_name}?sslmode={ssl_mode}")
}
