use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a blog post authored by a user.
///
/// `user_id` is a plain integer reference; the schema declares no foreign
/// key for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
    pub published: bool,
}

/// Input shape for creating or fully updating a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub published: bool,
}
