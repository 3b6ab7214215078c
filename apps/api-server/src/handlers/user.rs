//! User handlers.

use actix_web::{HttpResponse, web};
use serde_json::json;

use roster_shared::dto::UserProfileRequest;

use crate::middleware::auth::Authenticated;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn check_profile(req: &UserProfileRequest) -> AppResult<()> {
    let problems = req.problems();
    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::BadRequest(problems.join(", ")))
    }
}

/// POST /api/v1/user
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<UserProfileRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    check_profile(&req)?;

    let user = state
        .users
        .create(&req.last_name, &req.first_name, &req.email)
        .await?;

    Ok(HttpResponse::Created().json(user))
}

/// GET /api/v1/users
pub async fn find_all(state: web::Data<AppState>, caller: Authenticated) -> AppResult<HttpResponse> {
    tracing::debug!(caller = %caller.uid, "Listing users");
    let users = state.users.find_all().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// GET /api/v1/user/{uid}
///
/// An unknown uid yields `{}` rather than an error.
pub async fn find_by_uid(
    state: web::Data<AppState>,
    caller: Authenticated,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let uid = path.into_inner();
    tracing::debug!(caller = %caller.uid, uid = %uid, "Fetching user");

    match state.users.find_by_uid(&uid).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Ok(HttpResponse::Ok().json(json!({}))),
    }
}

/// PUT /api/v1/user/{uid}
pub async fn update(
    state: web::Data<AppState>,
    caller: Authenticated,
    path: web::Path<String>,
    body: web::Json<UserProfileRequest>,
) -> AppResult<HttpResponse> {
    let uid = path.into_inner();
    let req = body.into_inner();
    check_profile(&req)?;
    tracing::debug!(caller = %caller.uid, uid = %uid, "Updating user");

    let user = state
        .users
        .update(&uid, &req.last_name, &req.first_name, &req.email)
        .await?;

    Ok(HttpResponse::Ok().json(user))
}

/// DELETE /api/v1/user/{uid}
pub async fn delete(
    state: web::Data<AppState>,
    caller: Authenticated,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let uid = path.into_inner();
    tracing::debug!(caller = %caller.uid, uid = %uid, "Deleting user");

    let user = state.users.delete(&uid).await?;

    Ok(HttpResponse::Ok().json(user))
}
