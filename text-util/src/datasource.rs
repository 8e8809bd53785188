//! Datasource configuration
//!
//! The text tools share one small TOML file describing the database that
//! holds the documents, so the connection details never live on the command
//! line:
//!
//! ```toml
//! url = "sqlite://documents.db"
//! max_connections = 5
//! ```

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;

use crate::error::{Result, TextUtilError};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasourceConfig {
    /// Database URL (e.g., "sqlite://documents.db")
    pub url: String,
    /// Maximum pool connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

impl DatasourceConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            TextUtilError::Config(format!("cannot read {}: {}", path.as_ref().display(), e))
        })?;

        toml::from_str(&content).map_err(|e| TextUtilError::Config(e.to_string()))
    }

    /// Open a connection pool to the configured database.
    pub async fn connect(&self) -> Result<SqlitePool> {
        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect(&self.url)
            .await?;
        Ok(pool)
    }
}
