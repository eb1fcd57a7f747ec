//! User handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{NewUser, UserProfile};
use quill_shared::dto::UserPayload;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /users - list view, password omitted.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list().await?;
    let profiles: Vec<UserProfile> = users.into_iter().map(UserProfile::from).collect();

    Ok(HttpResponse::Ok().json(profiles))
}

/// GET /users/{id} - full record; an absent id reads as JSON null, not an
/// error.
pub async fn get(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let user = state.users.find_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// GET /users_management - name/contact projection ordered by username,
/// case-insensitively.
pub async fn management(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let entries = state.users.list_management().await?;

    Ok(HttpResponse::Ok().json(entries))
}

/// PUT /users/{id} - full-record update; 204 when a row was affected.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UserPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let payload = body.into_inner();

    let draft = NewUser {
        first_name: payload.first_name,
        last_name: payload.last_name,
        username: payload.username,
        email: payload.email,
        password: payload.password,
        profile_image_url: payload.profile_image_url,
        bio: payload.bio,
    };

    if state.users.update(id, draft).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound(format!("user {id}")))
    }
}
