//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::error::RepoError;
use quill_core::ports::{CommentRepository, PostRepository, UserRepository};
use quill_infra::database::{Database, DatabaseConfig};
use quill_infra::{SqliteCommentRepository, SqlitePostRepository, SqliteUserRepository};

/// Shared application state: one repository per resource, all borrowing
/// the same storage handle.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

impl AppState {
    /// Open the storage file and wire up the repositories.
    ///
    /// The store is not optional: a connection failure aborts startup.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, RepoError> {
        let db = Database::connect(config).await?;

        tracing::info!("Application state initialized");

        Ok(Self {
            users: Arc::new(SqliteUserRepository::new(db.conn.clone())),
            posts: Arc::new(SqlitePostRepository::new(db.conn.clone())),
            comments: Arc::new(SqliteCommentRepository::new(db.conn)),
        })
    }
}
