//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to register a new user.
///
/// `profile_image_url` may be omitted; registration falls back to the
/// stock image reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub profile_image_url: Option<String>,
    pub bio: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `/login` and `/register` responses.
///
/// The token is the matched row's identifier. A rejected credential check
/// serializes as `{"valid":false}` with no token key at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<i32>,
}

impl CredentialResponse {
    pub fn accepted(token: i32) -> Self {
        Self {
            valid: true,
            token: Some(token),
        }
    }

    pub fn rejected() -> Self {
        Self {
            valid: false,
            token: None,
        }
    }
}

/// Full-record update payload for `PUT /users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub profile_image_url: String,
    pub bio: String,
}

/// Create/update payload for posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPayload {
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub published: bool,
}

/// Create/update payload for comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentPayload {
    pub post_id: i32,
    pub author_id: i32,
    pub body: String,
}
