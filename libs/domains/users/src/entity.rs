use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM Entity for the users table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub verified_email: bool,
    pub date_joined: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
    pub last_login: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from SeaORM Model to domain User
impl From<Model> for crate::models::User {
    fn from(model: Model) -> Self {
        Self {
            user_id: model.user_id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            password_hash: model.password_hash,
            verified_email: model.verified_email,
            date_joined: model.date_joined.into(),
            updated_at: model.updated_at.map(Into::into),
            last_login: model.last_login.map(Into::into),
        }
    }
}

// Conversion from domain NewUser to SeaORM ActiveModel
impl From<crate::models::NewUser> for ActiveModel {
    fn from(input: crate::models::NewUser) -> Self {
        ActiveModel {
            user_id: NotSet,
            email: Set(input.email),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            password_hash: Set(input.password_hash),
            verified_email: Set(false),
            date_joined: Set(chrono::Utc::now().into()),
            updated_at: Set(None),
            last_login: Set(None),
        }
    }
}
