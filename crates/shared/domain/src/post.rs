//! Post domain entity, owned by a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainResult;
use crate::validation::{first_failure, not_blank, RequiredFields};

/// Post domain entity.
///
/// `user_id` is a non-owning back-reference; the store removes posts when
/// their user is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post creation data transfer object
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreatePost {
    /// Post name
    #[validate(required, custom(function = "not_blank"))]
    pub name: Option<String>,
    /// Unique email address across posts
    #[validate(required, custom(function = "not_blank"))]
    pub email: Option<String>,
    /// Plain-text password, hashed before storage
    #[validate(required, custom(function = "not_blank"))]
    pub password: Option<String>,
}

impl CreatePost {
    /// Check that name, email and password are all present and non-blank.
    pub fn into_required_fields(self) -> DomainResult<RequiredFields> {
        self.validate().map_err(|e| first_failure(&e))?;
        Ok(RequiredFields::from_validated(
            self.name,
            self.email,
            self.password,
        ))
    }
}

/// Post response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PostResponse {
    /// Post identifier
    pub id: i32,
    /// Owning user identifier
    pub user_id: i32,
    pub name: String,
    pub email: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            name: post.name,
            email: post.email,
        }
    }
}
