//! User service - Handles user-related business logic.
//!
//! Owns the account rules: required fields, email uniqueness, password
//! hashing and credential checks. Hashing goes through the domain
//! [`Password`] value object.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateUser, Password, UpdateUser, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;
use crate::types::PaginationParams;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: &str) -> AppResult<User>;

    /// List users newest first. Out-of-range paging values are coerced.
    async fn list_users(&self, page: i64, page_size: i64) -> AppResult<Vec<User>>;

    /// Register a new account. The password is hashed before it is stored.
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// Apply the non-empty fields of `input` to the stored user
    async fn update_user(&self, id: &str, input: UpdateUser) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: &str) -> AppResult<()>;

    /// Check an email/password pair.
    ///
    /// An unknown email (or a failed lookup) is `NotFound`; a wrong
    /// password is `InvalidInput`.
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<User>;
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

    async fn ensure_email_free(&self, email: &str) -> AppResult<()> {
        if self.repo.find_by_email(email).await?.is_some() {
            return Err(AppError::invalid_input("email already in use"));
        }
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: &str) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self, page: i64, page_size: i64) -> AppResult<Vec<User>> {
        let params = PaginationParams::new(page, page_size).normalized();
        self.repo.find_all(params.limit(), params.offset()).await
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        if input.name.is_empty() || input.email.is_empty() || input.password.is_empty() {
            return Err(AppError::invalid_input("name, email and password are required"));
        }

        self.ensure_email_free(&input.email).await?;

        let password_hash = Password::new(&input.password)?.into_string();
        let user = User::new(Uuid::new_v4().to_string(), input.name, input.email, password_hash);
        self.repo.create(&user).await?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: &str, input: UpdateUser) -> AppResult<User> {
        let mut user = self.get_user(id).await?;

        if let Some(name) = non_empty(input.name) {
            user.name = name;
        }

        if let Some(email) = non_empty(input.email) {
            // Unchanged email skips the check so a user never collides with itself
            if email != user.email {
                self.ensure_email_free(&email).await?;
                user.email = email;
            }
        }

        if let Some(password) = non_empty(input.password) {
            user.password_hash = Password::new(&password)?.into_string();
        }

        user.touch();
        self.repo.update(&user).await?;

        tracing::info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.repo.delete(id).await?;

        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let user = match self.repo.find_by_email(email).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(AppError::NotFound),
            Err(e) => {
                tracing::warn!(error = %e, "User lookup failed during authentication");
                return Err(AppError::NotFound);
            }
        };

        if !Password::from_hash(user.password_hash.clone()).verify(password) {
            return Err(AppError::invalid_input("invalid credentials"));
        }

        Ok(user)
    }
}
