//! Engine configuration.

use sqlx::SqlitePool;

use crate::application::ports::RepositoryError;

/// Default database file when the environment does not say otherwise.
const DEFAULT_DATABASE_PATH: &str = "questkeeper.db";

/// Engine configuration, loaded from the environment.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Path of the SQLite database file.
    pub database_path: String,
}

impl EngineConfig {
    /// Load configuration from the environment (`QUESTKEEPER_DB`), reading
    /// a `.env` file if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let database_path = std::env::var("QUESTKEEPER_DB")
            .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());
        Self { database_path }
    }

    /// Open a connection pool on the configured database file, creating the
    /// file if it does not exist.
    pub async fn connect(&self) -> Result<SqlitePool, RepositoryError> {
        connect(&self.database_path).await
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
        }
    }
}

/// Open a pool on a SQLite file, creating it if missing.
pub async fn connect(database_path: &str) -> Result<SqlitePool, RepositoryError> {
    SqlitePool::connect(&format!("sqlite:{}?mode=rwc", database_path))
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_file() {
        assert_eq!(EngineConfig::default().database_path, "questkeeper.db");
    }
}
