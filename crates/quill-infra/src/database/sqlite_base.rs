use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, Iterable, PrimaryKeyToColumn,
    PrimaryKeyTrait, QueryFilter,
};

use quill_core::error::RepoError;
use quill_core::ports::BaseRepository;

/// Generic SQLite repository implementation.
///
/// Every accessor issues exactly one parameterized statement against the
/// shared handle. Entity-specific queries live on the concrete aliases in
/// `sqlite_repo`.
pub struct SqliteBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> SqliteBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, T, D, ID> BaseRepository<T, D, ID> for SqliteBaseRepository<E>
where
    E: EntityTrait,
    E::Model: Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID> + PrimaryKeyToColumn<Column = E::Column>,
    T: From<E::Model> + Send + Sync + 'static,
    D: Into<E::ActiveModel> + Send + Sync + 'static,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
{
    async fn list(&self) -> Result<Vec<T>, RepoError> {
        let rows = E::find()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let row = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, draft: D) -> Result<ID, RepoError> {
        let result = E::insert(draft.into()).exec(&self.db).await.map_err(|e| {
            let err = e.to_string();
            if err.contains("UNIQUE") || err.contains("constraint") {
                RepoError::Constraint(err)
            } else {
                RepoError::Query(err)
            }
        })?;

        Ok(result.last_insert_id)
    }

    async fn update(&self, id: ID, draft: D) -> Result<bool, RepoError> {
        // Single UPDATE filtered on the primary key; the caller turns the
        // affected-row flag into 204 or 404.
        let Some(pk) = E::PrimaryKey::iter().next() else {
            return Err(RepoError::Query("entity has no primary key".to_string()));
        };

        let result = E::update_many()
            .set(draft.into())
            .filter(pk.into_column().eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        // Deletion does not report whether the id existed; a second call
        // with the same id is a no-op.
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        tracing::debug!(rows_affected = result.rows_affected, "delete executed");

        Ok(())
    }
}
