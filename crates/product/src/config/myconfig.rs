use anyhow::{Context, Result, anyhow};
use shared::config::PoolSettings;
use sqlx::mysql::MySqlConnectOptions;
use std::{net::SocketAddr, str::FromStr, time::Duration};

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database: DatabaseConfig,
    pub run_migrations: bool,
    pub otel_endpoint: Option<String>,
    pub is_dev: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).with_context(|| format!("Missing environment variable: {key}"))
        };

        let port = parse_or(&lookup, "PORT", 3000u16)?;

        let database = DatabaseConfig {
            host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: parse_or(&lookup, "DB_PORT", 3306u16)?,
            user: required("DB_USER")?,
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            database: required("DB_DATABASE")?,
            max_connections: parse_or(&lookup, "DB_MAX_CONN", 10u32)?,
            acquire_timeout_secs: parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 600u64)?,
        };

        if database.max_connections == 0 {
            return Err(anyhow!("DB_MAX_CONN must be greater than zero"));
        }

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref() {
            None | Some("false") => false,
            Some("true") => true,
            Some(other) => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let otel_endpoint = lookup("OTEL_ENDPOINT").filter(|v| !v.trim().is_empty());

        let is_dev = lookup("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let enable_file_log = lookup("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            port,
            database,
            run_migrations,
            otel_endpoint,
            is_dev,
            enable_file_log,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_optional_values_are_missing() {
        let config = config_from(&[("DB_USER", "root"), ("DB_DATABASE", "shop")]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.password, "");
        assert_eq!(config.database.max_connections, 10);
        assert!(!config.run_migrations);
        assert!(config.otel_endpoint.is_none());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("DB_HOST", "mysql"),
            ("DB_PORT", "3307"),
            ("DB_USER", "app"),
            ("DB_PASSWORD", "secret"),
            ("DB_DATABASE", "catalog"),
            ("DB_MAX_CONN", "4"),
            ("RUN_MIGRATIONS", "true"),
            ("OTEL_ENDPOINT", "http://otel-collector:4317"),
        ])
        .unwrap();

        assert_eq!(config.listen_addr().port(), 8080);
        assert_eq!(config.database.host, "mysql");
        assert_eq!(config.database.port, 3307);
        assert_eq!(config.database.pool_settings().max_connections, 4);
        assert!(config.run_migrations);
        assert_eq!(
            config.otel_endpoint.as_deref(),
            Some("http://otel-collector:4317")
        );
    }

    #[test]
    fn missing_database_name_is_an_error() {
        let err = config_from(&[("DB_USER", "root")]).unwrap_err();
        assert!(err.to_string().contains("DB_DATABASE"));
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = config_from(&[("DB_USER", "root"), ("DB_DATABASE", "shop"), ("PORT", "http")])
            .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn run_migrations_rejects_unknown_values() {
        let err = config_from(&[
            ("DB_USER", "root"),
            ("DB_DATABASE", "shop"),
            ("RUN_MIGRATIONS", "yes"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("RUN_MIGRATIONS"));
    }
}
