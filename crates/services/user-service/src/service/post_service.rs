//! Post service - posts are created under, and listed for, an existing user.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use common::{AppError, AppResult};
use domain::{CreatePost, Password, Post, ENTITY_USER, FIELD_EMAIL};

use crate::repository::{PostRepository, UserRepository};

#[async_trait]
pub trait PostService: Send + Sync {
    /// Validate and store a post owned by `user_id`
    async fn create_post(&self, user_id: i32, input: CreatePost) -> AppResult<Post>;

    /// List the posts owned by `user_id`
    async fn list_posts(&self, user_id: i32) -> AppResult<Vec<Post>>;
}

pub struct PostManager {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
}

impl PostManager {
    pub fn new(users: Arc<dyn UserRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { users, posts }
    }

    async fn ensure_user(&self, user_id: i32) -> AppResult<()> {
        if self.users.exists(user_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(ENTITY_USER))
        }
    }
}

#[async_trait]
impl PostService for PostManager {
    async fn create_post(&self, user_id: i32, input: CreatePost) -> AppResult<Post> {
        self.ensure_user(user_id).await?;
        let fields = input.into_required_fields()?;

        if self.posts.find_by_email(&fields.email).await?.is_some() {
            return Err(AppError::conflict(FIELD_EMAIL));
        }

        let password = Password::new(&fields.password)?;
        let post = self
            .posts
            .create(user_id, fields.name, fields.email, password.into_string())
            .await?;

        info!(user_id, post_id = post.id, "Post created");
        Ok(post)
    }

    async fn list_posts(&self, user_id: i32) -> AppResult<Vec<Post>> {
        self.ensure_user(user_id).await?;
        self.posts.list_by_user(user_id).await
    }
}
