//! Post handlers, nested under the owning user.

use axum::{extract::State, response::Json, routing::get, Router};

use common::AppResult;
use domain::{CreatePost, PostResponse};

use crate::api::extractors::{JsonBody, PathId};
use crate::api::state::AppState;

/// Create post routes (mounted under `/users`)
pub fn post_routes() -> Router<AppState> {
    Router::new().route("/:id/posts", get(list_posts).post(create_post))
}

/// Create a post owned by a user
#[utoipa::path(
    post,
    path = "/users/{id}/posts",
    tag = "Posts",
    params(
        ("id" = i32, Path, description = "Owning user ID")
    ),
    request_body = CreatePost,
    responses(
        (status = 200, description = "Post created", body = PostResponse),
        (status = 400, description = "Missing or blank field"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    PathId(user_id): PathId,
    JsonBody(payload): JsonBody<CreatePost>,
) -> AppResult<Json<PostResponse>> {
    let post = state.post_service.create_post(user_id, payload).await?;
    Ok(Json(PostResponse::from(post)))
}

/// List the posts owned by a user
#[utoipa::path(
    get,
    path = "/users/{id}/posts",
    tag = "Posts",
    params(
        ("id" = i32, Path, description = "Owning user ID")
    ),
    responses(
        (status = 200, description = "Posts of the user", body = Vec<PostResponse>),
        (status = 404, description = "User not found")
    )
)]
pub async fn list_posts(
    State(state): State<AppState>,
    PathId(user_id): PathId,
) -> AppResult<Json<Vec<PostResponse>>> {
    let posts = state.post_service.list_posts(user_id).await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}
