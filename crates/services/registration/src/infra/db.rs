//! Database connection management.

use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::sqlx::ConnectOptions as _;
use sea_orm::{DatabaseConnection, DbErr, RuntimeErr, SqlxSqliteConnector};

use common::DatabaseConfig;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the SQLite file, creating it when missing.
    ///
    /// The configured path is used as a filename, not as part of a URL.
    /// Schema setup is left to [`crate::repository::UserRepository::initialize`].
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let options = SqliteConnectOptions::new()
            .filename(config.file_path())
            .create_if_missing(true)
            .disable_statement_logging();

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(|err| DbErr::Conn(RuntimeErr::SqlxError(err)))?;

        let connection = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);
        tracing::debug!(path = %config.path.display(), "Database connected");

        Ok(Self { connection })
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Close every pooled connection, including those held by clones.
    pub async fn close(self) -> Result<(), DbErr> {
        self.connection.close().await?;
        tracing::debug!("Database connection closed");
        Ok(())
    }
}
