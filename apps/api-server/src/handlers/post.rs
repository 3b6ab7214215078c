//! Post handlers.

use actix_web::{HttpResponse, web};

use roster_core::domain::{Post, PostResponse};
use roster_shared::dto::CreatePostRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/post
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.text.is_empty() {
        return Err(AppError::Validation("text is required".to_string()));
    }

    let post = state.posts.create(&req.text).await?;

    Ok(HttpResponse::Created().json(post.to_response()))
}

/// GET /api/v1/posts
pub async fn find_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .posts
        .find_all()
        .await?
        .iter()
        .map(Post::to_response)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}
