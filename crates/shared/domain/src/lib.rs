//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod constants;
pub mod error;
pub mod password;
pub mod post;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use post::{CreatePost, Post, PostResponse};
pub use user::{CreateUser, UpdateUser, User, UserChanges, UserResponse};
pub use validation::RequiredFields;
