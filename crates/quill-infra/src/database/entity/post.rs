//! Post entity for SeaORM.

use chrono::Utc;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::NewPost;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_on: DateTimeUtc,
    pub updated_on: DateTimeUtc,
    pub published: bool,
}

/// ORM-level relation only; the schema keeps `user_id` a bare integer.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain record.
impl From<Model> for quill_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            content: model.content,
            created_on: model.created_on,
            updated_on: model.updated_on,
            published: model.published,
        }
    }
}

/// Conversion from a draft to an ActiveModel.
///
/// `updated_on` is stamped here so create and update share one write path;
/// `created_on` stays under the schema default.
impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            user_id: Set(post.user_id),
            title: Set(post.title),
            content: Set(post.content),
            updated_on: Set(Utc::now()),
            published: Set(post.published),
            ..Default::default()
        }
    }
}
