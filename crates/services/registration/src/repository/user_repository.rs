//! User repository backed by a single SQLite table.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Schema, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::AppResult;
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Each method is one storage operation. Storage engine failures are
/// returned as errors; a taken username is not a failure.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create the `users` table if it does not exist yet
    async fn initialize(&self) -> AppResult<()>;

    /// Insert a user; `false` when the username is already stored
    async fn insert(&self, user: &User) -> AppResult<bool>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// List all users ordered by username
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn initialize(&self) -> AppResult<()> {
        let backend = self.db.get_database_backend();
        let mut table = Schema::new(backend).create_table_from_entity(UserEntity);
        table.if_not_exists();

        self.db.execute(backend.build(&table)).await?;
        tracing::debug!("Users table ensured");

        Ok(())
    }

    async fn insert(&self, user: &User) -> AppResult<bool> {
        let active_model = ActiveModel {
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            password: Set(user.password.clone()),
        };

        // The primary key decides; a conflicting row is left untouched.
        let inserted = UserEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(user::Column::Username)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(inserted == 1)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(username.to_owned())
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Username)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
