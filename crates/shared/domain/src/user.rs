//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainResult;
use crate::validation::{first_failure, non_blank, not_blank, RequiredFields};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check whether the given email differs from the current one
    pub fn is_email_change(&self, email: &str) -> bool {
        self.email != email
    }
}

/// User creation data transfer object.
///
/// Every field is optional on the wire so that absence is reported as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUser {
    /// User display name
    #[validate(required, custom(function = "not_blank"))]
    pub name: Option<String>,
    /// Unique email address
    #[validate(required, custom(function = "not_blank"))]
    pub email: Option<String>,
    /// Plain-text password, hashed before storage
    #[validate(required, custom(function = "not_blank"))]
    pub password: Option<String>,
}

impl CreateUser {
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

/// User update data transfer object (partial update).
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateUser {
    /// New display name
    pub name: Option<String>,
    /// New email address
    pub email: Option<String>,
    /// New plain-text password
    pub password: Option<String>,
}

impl UpdateUser {
    /// Drop absent or blank fields; only what remains is applied.
    pub fn without_blank_fields(self) -> Self {
        Self {
            name: non_blank(self.name),
            email: non_blank(self.email),
            password: non_blank(self.password),
        }
    }
}

/// Field changes handed to the repository; `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// User identifier
    pub id: i32,
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
