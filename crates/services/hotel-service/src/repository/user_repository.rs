//! User repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{NewUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Only accepts [`NewUser`] values, which already carry a derived
/// credential; plaintext passwords never reach this layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a new user, assigning its id. A taken email is a `Conflict`.
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// List all users in creation order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Delete every user
    async fn drop_all(&self) -> AppResult<()>;
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
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            encrypted_password: Set(user.encrypted_password.into_string()),
            created_at: Set(Utc::now()),
        };

        // users.email is unique; a racing create loses here
        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Email"),
                _ => AppError::from(e),
            })?;
        Ok(User::from(model))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn drop_all(&self) -> AppResult<()> {
        UserEntity::delete_many().exec(&self.db).await?;
        tracing::info!("Dropped users collection");
        Ok(())
    }
}
