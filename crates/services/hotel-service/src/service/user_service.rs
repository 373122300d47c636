//! User service - Handles user-related business logic.
//!
//! Creation always runs validate, then derive, then persist; invalid input
//! never reaches the hasher or the store.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{CreateUserParams, NewUser, User};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate params, hash the password and store the user
    async fn create_user(&self, params: CreateUserParams) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// List all users
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
    async fn create_user(&self, params: CreateUserParams) -> AppResult<User> {
        params.validate()?;

        // Check if email already exists
        if self.repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::conflict("Email"));
        }

        // Argon2 is CPU-bound; keep it off the async workers
        let new_user = tokio::task::spawn_blocking(move || NewUser::from_params(params))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))??;

        let user = self.repo.create(new_user).await?;
        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found("user")
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use domain::Credential;

    fn params() -> CreateUserParams {
        CreateUserParams::new("James", "Foo", "james@foo.com", "supersecurepassword")
    }

    #[tokio::test]
    async fn test_create_user_hashes_before_persisting() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .times(1)
            .withf(|user| {
                user.encrypted_password.as_str() != "supersecurepassword"
                    && user.encrypted_password.verify("supersecurepassword")
            })
            .returning(|user| Ok(user.into_user(Uuid::new_v4())));

        let service = UserManager::new(Arc::new(repo));
        let user = service.create_user(params()).await.unwrap();

        assert_eq!(user.email, "james@foo.com");
        assert!(user.encrypted_password.verify("supersecurepassword"));
    }

    #[tokio::test]
    async fn test_invalid_params_never_touch_repository() {
        // No expectations: any repository call panics
        let repo = MockUserRepository::new();
        let service = UserManager::new(Arc::new(repo));

        let err = service
            .create_user(CreateUserParams::new("J", "Foo", "foo@bar", "short"))
            .await
            .unwrap_err();

        let errors = err.validation_errors().expect("validation error");
        assert!(errors.contains("firstName"));
        assert!(errors.contains("email"));
        assert!(errors.contains("password"));
        assert!(!errors.contains("lastName"));
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|email| {
            Ok(Some(User {
                id: Uuid::new_v4(),
                first_name: "Existing".to_string(),
                last_name: "User".to_string(),
                email: email.to_string(),
                encrypted_password: Credential::from_hash("hashed".to_string()),
            }))
        });
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user(params()).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound("user"))));
    }
}
