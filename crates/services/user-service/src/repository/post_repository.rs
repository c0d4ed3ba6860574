//! Post repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::entities::post::{self, ActiveModel, Entity as PostEntity};
use common::{AppError, AppResult};
use domain::{Post, FIELD_EMAIL};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Post repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Post>>;

    /// List the posts owned by a user, ordered by ID
    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<Post>>;

    /// Insert a new post owned by `user_id`
    async fn create(
        &self,
        user_id: i32,
        name: String,
        email: String,
        password_hash: String,
    ) -> AppResult<Post>;
}

/// SeaORM-backed implementation of PostRepository
pub struct PostStore {
    db: DatabaseConnection,
}

impl PostStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Post>> {
        let result = PostEntity::find()
            .filter(post::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(Post::from))
    }

    async fn list_by_user(&self, user_id: i32) -> AppResult<Vec<Post>> {
        let models = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Post::from).collect())
    }

    async fn create(
        &self,
        user_id: i32,
        name: String,
        email: String,
        password_hash: String,
    ) -> AppResult<Post> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            name: Set(name),
            email: Set(email),
            password_hash: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from(e).on_unique_violation(FIELD_EMAIL))?;
        Ok(Post::from(model))
    }
}
