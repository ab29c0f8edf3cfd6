//! Shared configuration structures.

use std::path::{Component, Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Storage file used when nothing else is configured
pub const DEFAULT_DATABASE_PATH: &str = "users.db";

/// One connection is enough for a single caller
pub const DEFAULT_MAX_CONNECTIONS: u32 = 1;

/// SQLite database configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Location of the SQLite file (created on first connect)
    pub path: PathBuf,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Configuration for the given storage file with default pool settings.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Path handed to SQLite as a plain filename, never parsed as a URL.
    ///
    /// A bare relative name such as `:memory:` is anchored to the current
    /// directory so SQLite opens a file on disk rather than a special name.
    pub fn file_path(&self) -> PathBuf {
        match self.path.components().next() {
            Some(Component::Normal(first)) if first.to_string_lossy().starts_with(':') => {
                Path::new(".").join(&self.path)
            }
            _ => self.path.clone(),
        }
    }

    /// Reject settings the storage engine cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(AppError::config("database path must not be empty"));
        }
        if self.max_connections == 0 {
            return Err(AppError::config("max_connections must be at least 1"));
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATABASE_PATH),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}
