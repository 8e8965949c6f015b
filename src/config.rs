use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::store::adapter::outgoing::DEFAULT_STORE_TIMEOUT;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Where revoked access tokens are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlacklistBackend {
    Redis,
    Postgres,
}

impl FromStr for BlacklistBackend {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(Self::Redis),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// Only needed, and only read, for the Redis blacklist.
    pub redis_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub store_timeout: Duration,
    pub blacklist_backend: BlacklistBackend,
    pub db_max_connections: u32,
}

impl AppConfig {
    /// Load `.env.{RUST_ENV}` (falling back to `.env`), then read the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let database_url = required("DATABASE_URL")?;
        let host = required("HOST")?;
        let port = parse("PORT", &required("PORT")?)?;

        let store_timeout = match lookup("STORE_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(parse("STORE_TIMEOUT_MS", &raw)?),
            None => DEFAULT_STORE_TIMEOUT,
        };
        if store_timeout.is_zero() {
            return Err(ConfigError::Invalid {
                key: "STORE_TIMEOUT_MS",
                value: "0".to_string(),
            });
        }

        let blacklist_backend = match lookup("BLACKLIST_BACKEND") {
            Some(raw) => parse("BLACKLIST_BACKEND", &raw)?,
            None => BlacklistBackend::Redis,
        };

        let redis_url = match blacklist_backend {
            BlacklistBackend::Redis => Some(required("REDIS_URL")?),
            BlacklistBackend::Postgres => None,
        };

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => parse("DB_MAX_CONNECTIONS", &raw)?,
            None => 20,
        };

        Ok(Self {
            database_url,
            redis_url,
            host,
            port,
            store_timeout,
            blacklist_backend,
            db_max_connections,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<&'static str, String> {
        HashMap::from([
            ("DATABASE_URL", "postgres://localhost/notifications".to_string()),
            ("REDIS_URL", "redis://127.0.0.1:6379".to_string()),
            ("HOST", "127.0.0.1".to_string()),
            ("PORT", "8080".to_string()),
        ])
    }

    fn load(vars: &HashMap<&'static str, String>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_for_optional_settings() {
        let config = load(&base_vars()).unwrap();

        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(config.store_timeout, DEFAULT_STORE_TIMEOUT);
        assert_eq!(config.blacklist_backend, BlacklistBackend::Redis);
        assert_eq!(config.db_max_connections, 20);
    }

    #[test]
    fn missing_required_variable_is_reported() {
        let mut vars = base_vars();
        vars.remove("REDIS_URL");

        assert_eq!(load(&vars).unwrap_err(), ConfigError::Missing("REDIS_URL"));
    }

    #[test]
    fn postgres_blacklist_needs_no_redis() {
        let mut vars = base_vars();
        vars.remove("REDIS_URL");
        vars.insert("BLACKLIST_BACKEND", "postgres".to_string());

        let config = load(&vars).unwrap();

        assert_eq!(config.blacklist_backend, BlacklistBackend::Postgres);
        assert_eq!(config.redis_url, None);
    }

    #[test]
    fn optional_settings_are_parsed() {
        let mut vars = base_vars();
        vars.insert("STORE_TIMEOUT_MS", "500".to_string());
        vars.insert("BLACKLIST_BACKEND", "Postgres".to_string());
        vars.insert("DB_MAX_CONNECTIONS", "5".to_string());

        let config = load(&vars).unwrap();

        assert_eq!(config.store_timeout, Duration::from_millis(500));
        assert_eq!(config.blacklist_backend, BlacklistBackend::Postgres);
        assert_eq!(config.db_max_connections, 5);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut vars = base_vars();
        vars.insert("PORT", "eighty".to_string());
        assert!(matches!(
            load(&vars),
            Err(ConfigError::Invalid { key: "PORT", .. })
        ));

        let mut vars = base_vars();
        vars.insert("BLACKLIST_BACKEND", "memcached".to_string());
        assert!(matches!(
            load(&vars),
            Err(ConfigError::Invalid {
                key: "BLACKLIST_BACKEND",
                ..
            })
        ));

        let mut vars = base_vars();
        vars.insert("STORE_TIMEOUT_MS", "0".to_string());
        assert!(load(&vars).is_err());
    }
}
