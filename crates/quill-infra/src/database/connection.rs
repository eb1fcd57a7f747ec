use std::time::Duration;

use sea_orm::{ConnectOptions, DbConn};

use quill_core::error::RepoError;

/// Configuration for the storage file.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite URL, e.g. `sqlite://db.sqlite3?mode=rwc`.
    pub url: String,
    /// Pool ceiling. The store is a single file with its own locking, so
    /// this defaults to 1 at the configuration layer.
    pub max_connections: u32,
}

/// Handle to the storage file.
pub struct Database {
    pub conn: DbConn,
}

impl Database {
    /// Open the SQLite file named by the configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::info!(url = %config.url, "Opening database");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(true)
            .to_owned();

        let conn = sea_orm::Database::connect(opts)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        tracing::info!(
            max_connections = config.max_connections,
            "Database connected"
        );

        Ok(Self { conn })
    }
}
