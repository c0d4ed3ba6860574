//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::{post_handler, user_handler};
use domain::{CreatePost, CreateUser, PostResponse, UpdateUser, UserResponse};

/// OpenAPI documentation for the user service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service",
        version = "0.1.0",
        description = "User management with owned posts",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        post_handler::create_post,
        post_handler::list_posts,
    ),
    components(
        schemas(
            CreateUser,
            UpdateUser,
            UserResponse,
            CreatePost,
            PostResponse,
            user_handler::MessageResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Posts", description = "Posts owned by a user")
    )
)]
pub struct ApiDoc;
