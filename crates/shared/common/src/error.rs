//! Unified error handling for the registration store.
//!
//! Expected negative outcomes (a taken username, a failed login) are plain
//! `bool` values and never reach this type. Everything here is unexpected.

use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Storage engine failures
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Output
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    // Configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    /// Get error code for reporting
    pub fn code(&self) -> &'static str {
        match self {
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(_) => self.to_string(),

            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                "Failed to write output".to_string()
            }
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {:?}", e);
                "Failed to encode output".to_string()
            }
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message_is_shown() {
        let err = AppError::config("database path must not be empty");

        assert_eq!(err.code(), "CONFIG_ERROR");
        assert_eq!(
            err.user_message(),
            "Invalid configuration: database path must not be empty"
        );
    }

    #[test]
    fn test_io_error_details_are_hidden() {
        let err = AppError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed by reader",
        ));

        assert_eq!(err.code(), "IO_ERROR");
        assert!(!err.user_message().contains("pipe closed"));
    }

    #[cfg(feature = "database")]
    #[test]
    fn test_database_error_details_are_hidden() {
        let err = AppError::from(sea_orm::DbErr::Custom("no such table: users".into()));

        assert_eq!(err.code(), "DATABASE_ERROR");
        assert_eq!(err.user_message(), "A database error occurred");
    }
}
