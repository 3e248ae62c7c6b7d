use anyhow::{Context, Result};
use sqlx::mysql::MySqlConnectOptions;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub connection_name: String,
    pub database: String,
    pub strategy: ConnectStrategy,
}

/// How to reach MySQL. Decided once at startup from the runtime
/// environment and injected through the config, never re-evaluated
/// per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectStrategy {
    /// Plain TCP to a local server, the non-managed default.
    Tcp,
    /// Unix domain socket to the Cloud SQL proxy colocated on the
    /// managed platform.
    CloudSqlSocket,
}

impl ConnectStrategy {
    pub fn detect() -> Self {
        Self::from_platform_env(std::env::var("GAE_ENV").ok().as_deref())
    }

    fn from_platform_env(gae_env: Option<&str>) -> Self {
        match gae_env {
            Some(value) if !value.is_empty() => Self::CloudSqlSocket,
            _ => Self::Tcp,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let strategy = ConnectStrategy::detect();

        // The instance connection name only matters when we talk to the
        // Cloud SQL proxy socket.
        let connection_name = match strategy {
            ConnectStrategy::CloudSqlSocket => std::env::var("WORKOUT_DB_CONNECTION_NAME")
                .context("Cannot load WORKOUT_DB_CONNECTION_NAME env variable")?,
            ConnectStrategy::Tcp => {
                std::env::var("WORKOUT_DB_CONNECTION_NAME").unwrap_or_default()
            }
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a number")?,
            database: DatabaseConfig {
                user: std::env::var("WORKOUT_DB_USER")
                    .context("Cannot load WORKOUT_DB_USER env variable")?,
                password: std::env::var("WORKOUT_DB_PASS")
                    .context("Cannot load WORKOUT_DB_PASS env variable")?,
                connection_name,
                database: std::env::var("WORKOUT_DB_NAME")
                    .context("Cannot load WORKOUT_DB_NAME env variable")?,
                strategy,
            },
        })
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .username(&self.user)
            .password(&self.password)
            .database(&self.database);

        match self.strategy {
            ConnectStrategy::Tcp => options.host("127.0.0.1").port(3306),
            ConnectStrategy::CloudSqlSocket => {
                options.socket(cloud_sql_socket_path(&self.connection_name))
            }
        }
    }
}

fn cloud_sql_socket_path(connection_name: &str) -> String {
    format!("/cloudsql/{connection_name}")
}
