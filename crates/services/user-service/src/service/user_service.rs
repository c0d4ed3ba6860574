//! User service - validation and orchestration for user records.
//!
//! Every rule is enforced here, before the repository is touched; handlers
//! are not trusted to have validated anything.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use common::{AppError, AppResult, OptionExt};
use domain::{CreateUser, Password, UpdateUser, User, UserChanges, ENTITY_USER, FIELD_EMAIL};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and store a new user
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// List every stored user
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Apply a partial update; absent or blank fields are left untouched
    async fn update_user(&self, id: i32, input: UpdateUser) -> AppResult<User>;

    /// Delete an existing user together with the posts it owns
    async fn delete_user(&self, id: i32) -> AppResult<()>;
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
            warn!("Rejected write: email already in use");
            return Err(AppError::conflict(FIELD_EMAIL));
        }
        Ok(())
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let fields = input.into_required_fields()?;
        self.ensure_email_free(&fields.email).await?;

        let password = Password::new(&fields.password)?;
        let user = self
            .repo
            .create(fields.name, fields.email, password.into_string())
            .await?;

        info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found(ENTITY_USER)
    }

    async fn update_user(&self, id: i32, input: UpdateUser) -> AppResult<User> {
        let existing = self.get_user(id).await?;
        let input = input.without_blank_fields();

        // An unchanged email never conflicts with itself
        if let Some(email) = input.email.as_deref() {
            if existing.is_email_change(email) {
                self.ensure_email_free(email).await?;
            }
        }

        let password_hash = input
            .password
            .as_deref()
            .map(Password::new)
            .transpose()?
            .map(Password::into_string);

        let changes = UserChanges {
            name: input.name,
            email: input.email,
            password_hash,
        };

        let user = self.repo.update(id, changes).await?;
        info!(user_id = user.id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        if !self.repo.exists(id).await? {
            return Err(AppError::not_found(ENTITY_USER));
        }

        self.repo.delete(id).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }
}
