//! Authentication handlers.
//!
//! Credentials are a plaintext username/password match and the "token" is
//! the matched row's identifier; both shapes are part of the public
//! contract.

use actix_web::{HttpResponse, web};

use quill_core::domain::NewUser;
use quill_shared::dto::{CredentialResponse, LoginRequest, RegisterRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Stock image reference applied when registration omits one.
const DEFAULT_PROFILE_IMAGE: &str = "default_image_url";

/// POST /login
///
/// A mismatch answers `{"valid":false}` with a success status, never an
/// HTTP error.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let response = match state
        .users
        .find_by_credentials(&req.username, &req.password)
        .await?
    {
        Some(user) => CredentialResponse::accepted(user.id),
        None => CredentialResponse::rejected(),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let draft = NewUser {
        first_name: req.first_name,
        last_name: req.last_name,
        username: req.username,
        email: req.email,
        password: req.password,
        profile_image_url: req
            .profile_image_url
            .unwrap_or_else(|| DEFAULT_PROFILE_IMAGE.to_string()),
        bio: req.bio,
    };

    let id = state.users.create(draft).await?;

    tracing::debug!(user_id = id, "Registered user");

    Ok(HttpResponse::Created().json(CredentialResponse::accepted(id)))
}
