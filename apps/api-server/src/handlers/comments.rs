//! Comment handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use quill_core::domain::NewComment;
use quill_shared::dto::CommentPayload;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CommentFilter {
    pub post_id: Option<i32>,
}

/// GET /comments, optionally filtered as /comments?post_id=N.
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<CommentFilter>,
) -> AppResult<HttpResponse> {
    let comments = match query.post_id {
        Some(post_id) => state.comments.find_by_post(post_id).await?,
        None => state.comments.list().await?,
    };

    Ok(HttpResponse::Ok().json(comments))
}

/// GET /comments/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let comment = state.comments.find_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// POST /comments - 201 with the new record's identifier as the body.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CommentPayload>,
) -> AppResult<HttpResponse> {
    let id = state.comments.create(draft(body.into_inner())).await?;

    Ok(HttpResponse::Created().json(id))
}

/// PUT /comments/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<CommentPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if state.comments.update(id, draft(body.into_inner())).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound(format!("comment {id}")))
    }
}

/// DELETE /comments/{id} - 204 whether or not the id existed.
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    state.comments.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

fn draft(payload: CommentPayload) -> NewComment {
    NewComment {
        post_id: payload.post_id,
        author_id: payload.author_id,
        body: payload.body,
    }
}
