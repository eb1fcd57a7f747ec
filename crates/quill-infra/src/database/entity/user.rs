//! User entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::{NewUser, UserSummary};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub profile_image_url: String,
    pub bio: String,
    pub created_on: DateTimeUtc,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain record.
impl From<Model> for quill_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            username: model.username,
            email: model.email,
            password: model.password,
            profile_image_url: model.profile_image_url,
            bio: model.bio,
            created_on: model.created_on,
            active: model.active,
        }
    }
}

/// Management projection straight off the row.
impl From<Model> for UserSummary {
    fn from(model: Model) -> Self {
        Self {
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
        }
    }
}

/// Conversion from a draft to an ActiveModel.
///
/// Only client-writable columns are set: `id`, `created_on` and `active`
/// stay `NotSet`, so inserts take the schema defaults and full-record
/// updates leave them untouched.
impl From<NewUser> for ActiveModel {
    fn from(user: NewUser) -> Self {
        Self {
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            username: Set(user.username),
            email: Set(user.email),
            password: Set(user.password),
            profile_image_url: Set(user.profile_image_url),
            bio: Set(user.bio),
            ..Default::default()
        }
    }
}
