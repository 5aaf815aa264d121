use chrono::Utc;
use entity::siglad_user::{self, UserRole, UserStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, SqlErr,
};

use crate::server::error::user::UserError;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user; a unique-constraint violation on the email column
    /// is translated to [`UserError::DuplicateEmail`].
    pub async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
        role: UserRole,
        status: UserStatus,
    ) -> Result<siglad_user::Model, UserError> {
        let user = siglad_user::ActiveModel {
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await.map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => UserError::DuplicateEmail,
            _ => UserError::Database(err),
        })
    }

    /// Find a user by email address
    pub async fn find_by_email(&self, email: &str) -> Result<Option<siglad_user::Model>, DbErr> {
        entity::prelude::SigladUser::find()
            .filter(siglad_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Find a user by id
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<siglad_user::Model>, DbErr> {
        entity::prelude::SigladUser::find_by_id(user_id).one(self.db).await
    }

    /// List all users, newest first
    pub async fn list(&self) -> Result<Vec<siglad_user::Model>, DbErr> {
        entity::prelude::SigladUser::find()
            .order_by_desc(siglad_user::Column::CreatedAt)
            .order_by_desc(siglad_user::Column::Id)
            .all(self.db)
            .await
    }

    /// Update a user's role and/or status; omitted fields keep their value
    pub async fn update(
        &self,
        user_id: i32,
        role: Option<UserRole>,
        status: Option<UserStatus>,
    ) -> Result<Option<siglad_user::Model>, DbErr> {
        let Some(user) = self.find_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut user: siglad_user::ActiveModel = user.into();
        if let Some(role) = role {
            user.role = ActiveValue::Set(role);
        }
        if let Some(status) = status {
            user.status = ActiveValue::Set(status);
        }

        let updated = user.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of the user existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SigladUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
