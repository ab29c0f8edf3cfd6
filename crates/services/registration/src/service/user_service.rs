//! User service - registration, credential checks and listing.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::User;

use crate::repository::UserRepository;

/// User service trait for dependency injection.
///
/// Expected negative outcomes come back as `false`; only storage engine
/// failures are errors.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Ensure the storage schema exists (idempotent)
    async fn initialize(&self) -> AppResult<()>;

    /// Register a user; `false` if the username is taken
    async fn add_user(&self, username: &str, email: &str, password: &str) -> AppResult<bool>;

    /// Check a username/password pair.
    ///
    /// Compares against the plain-text stored password. Nothing is hashed,
    /// so this offers no protection to a reader of the storage file.
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<bool>;

    /// All registered users, ordered by username
    async fn list_users(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn initialize(&self) -> AppResult<()> {
        self.repo.initialize().await?;
        tracing::info!("User store initialized");
        Ok(())
    }

    async fn add_user(&self, username: &str, email: &str, password: &str) -> AppResult<bool> {
        let user = User::new(username, email, password);
        let inserted = self.repo.insert(&user).await?;

        if inserted {
            tracing::info!(username, "User registered");
        } else {
            tracing::debug!(username, "Username already taken");
        }

        Ok(inserted)
    }

    async fn authenticate(&self, username: &str, password: &str) -> AppResult<bool> {
        let authenticated = self
            .repo
            .find_by_username(username)
            .await?
            .is_some_and(|user| user.password_matches(password));

        if !authenticated {
            tracing::warn!(username, "Authentication failed");
        }

        Ok(authenticated)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }
}
