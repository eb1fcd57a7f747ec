//! SQLite repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder};

use quill_core::domain::{Comment, Post, User, UserSummary};
use quill_core::error::RepoError;
use quill_core::ports::{CommentRepository, PostRepository, UserRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::sqlite_base::SqliteBaseRepository;

/// SQLite user repository.
pub type SqliteUserRepository = SqliteBaseRepository<UserEntity>;

/// SQLite post repository.
pub type SqlitePostRepository = SqliteBaseRepository<PostEntity>;

/// SQLite comment repository.
pub type SqliteCommentRepository = SqliteBaseRepository<CommentEntity>;

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, RepoError> {
        // Never log the password operand.
        tracing::debug!(username = %username, "Checking credentials");

        let row = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .filter(user::Column::Password.eq(password))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn list_management(&self) -> Result<Vec<UserSummary>, RepoError> {
        // COLLATE NOCASE keeps "alice", "Bob", "carol" in that order.
        let rows = UserEntity::find()
            .order_by(Expr::cust("username COLLATE NOCASE"), Order::Asc)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn find_by_author(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn find_by_post(&self, post_id: i32) -> Result<Vec<Comment>, RepoError> {
        let rows = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
