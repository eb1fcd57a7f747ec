use async_trait::async_trait;

use crate::domain::{Comment, NewComment, NewPost, NewUser, Post, User, UserSummary};
use crate::error::RepoError;

/// Generic repository trait defining the accessor set every entity gets.
///
/// `T` is the stored record, `D` the identifier-less draft consumed by the
/// write operations, `ID` the primary-key type. Each accessor maps to a
/// single parameterized statement.
#[async_trait]
pub trait BaseRepository<T, D, ID>: Send + Sync {
    /// Fetch every row.
    async fn list(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID. Absence is `None`, not an error.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a draft and return the assigned identifier.
    async fn create(&self, draft: D) -> Result<ID, RepoError>;

    /// Full-record update. Returns whether any row was affected.
    async fn update(&self, id: ID, draft: D) -> Result<bool, RepoError>;

    /// Delete by ID. Idempotent; does not report whether the row existed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific queries.
#[async_trait]
pub trait UserRepository: BaseRepository<User, NewUser, i32> {
    /// Look up a user by exact username/password match.
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, RepoError>;

    /// Management projection, ordered by username case-insensitively.
    async fn list_management(&self) -> Result<Vec<UserSummary>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, NewPost, i32> {
    async fn find_by_author(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, NewComment, i32> {
    async fn find_by_post(&self, post_id: i32) -> Result<Vec<Comment>, RepoError>;
}
