use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment entity - attached to a post by integer reference only, so it
/// lives and dies independently of the post row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub author_id: i32,
    pub body: String,
    pub created_on: DateTime<Utc>,
}

/// Input shape for creating or fully updating a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub post_id: i32,
    pub author_id: i32,
    pub body: String,
}
