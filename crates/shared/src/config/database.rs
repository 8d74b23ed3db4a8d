use sqlx::{
    MySql, Pool,
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
};
use std::time::Duration;

pub type ConnectionPool = Pool<MySql>;

#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(600),
        }
    }
}

pub struct ConnectionManager;

impl ConnectionManager {
    /// Builds the pool and opens one connection up front, so an unreachable
    /// datastore fails here instead of on the first request.
    pub async fn new_pool(
        options: MySqlConnectOptions,
        settings: &PoolSettings,
    ) -> anyhow::Result<ConnectionPool> {
        let pool = MySqlPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {}", err))?;

        Ok(pool)
    }
}
