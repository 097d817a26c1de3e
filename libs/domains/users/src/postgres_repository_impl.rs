use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::{NewUser, User},
    repository::UserRepository,
};

pub struct PgUserRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<entity::Model>, DbErr> {
        entity::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::Column::Email)))
                    .eq(email.to_lowercase()),
            )
            .one(self.base.db())
            .await
    }
}

fn db_err(e: DbErr) -> UserError {
    UserError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, input: NewUser) -> UserResult<User> {
        // Check for duplicate email
        let exists = self.email_exists(&input.email).await?;
        if exists {
            return Err(UserError::DuplicateEmail(input.email));
        }

        let active_model: entity::ActiveModel = input.into();

        let model = self.base.insert(active_model).await.map_err(db_err)?;

        tracing::info!(user_id = model.user_id, "Created user");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let model = self.base.find_by_id(id).await.map_err(db_err)?;
        Ok(model.map(|m| m.into()))
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let model = self.find_by_email(email).await.map_err(db_err)?;
        Ok(model.map(|m| m.into()))
    }

    async fn email_exists(&self, email: &str) -> UserResult<bool> {
        let exists = self.find_by_email(email).await.map_err(db_err)?.is_some();
        Ok(exists)
    }
}
