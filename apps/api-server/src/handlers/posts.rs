//! Post handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use quill_core::domain::NewPost;
use quill_shared::dto::PostPayload;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PostFilter {
    pub user_id: Option<i32>,
}

/// GET /posts, optionally filtered as /posts?user_id=N.
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<PostFilter>,
) -> AppResult<HttpResponse> {
    let posts = match query.user_id {
        Some(user_id) => state.posts.find_by_author(user_id).await?,
        None => state.posts.list().await?,
    };

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let post = state.posts.find_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts - 201 with the new record's identifier as the body.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = state.posts.create(draft(body.into_inner())).await?;

    Ok(HttpResponse::Created().json(id))
}

/// PUT /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if state.posts.update(id, draft(body.into_inner())).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound(format!("post {id}")))
    }
}

/// DELETE /posts/{id} - 204 whether or not the id existed.
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

fn draft(payload: PostPayload) -> NewPost {
    NewPost {
        user_id: payload.user_id,
        title: payload.title,
        content: payload.content,
        published: payload.published,
    }
}
