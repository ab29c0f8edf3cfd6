//! Registration store configuration.

use std::env;
use std::path::PathBuf;

use common::{DatabaseConfig, DEFAULT_DATABASE_PATH, DEFAULT_MAX_CONNECTIONS};

/// Registration store configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Storage file and pool settings
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Configuration for an explicit storage file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            database: DatabaseConfig::new(path),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig {
                path: env::var("REGISTRATION_DATABASE_PATH")
                    .or_else(|_| env::var("DATABASE_PATH"))
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATABASE_PATH)),
                max_connections: env::var("REGISTRATION_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            },
        }
    }
}
