use entity::siglad_user::{self, UserRole, UserStatus};
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{user::UserError, Error},
        service::audit::{AuditEvent, AuditRecorder, RESULT_EXITO, RESULT_FALLO},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create an account with a bcrypt-hashed password. Status defaults to
    /// ACTIVE when omitted.
    pub async fn create(&self, admin_user_id: i32, user: CreateUserDto) -> Result<UserDto, Error> {
        let recorder = AuditRecorder::new(self.db);

        let (Some(name), Some(email), Some(password), Some(role)) =
            (user.name, user.email, user.password, user.role)
        else {
            return Err(UserError::MissingFields.into());
        };

        let role = parse_role(&role)?;
        let status = match user.status {
            Some(status) => parse_status(&status)?,
            None => UserStatus::Active,
        };

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

        let repository = UserRepository::new(self.db);
        let created = match repository
            .create(name, email, password_hash, role, status)
            .await
        {
            Ok(created) => created,
            Err(err @ UserError::DuplicateEmail) => {
                recorder
                    .record(user_event(
                        admin_user_id,
                        "CREATE",
                        None,
                        "Usuario creado",
                        RESULT_FALLO,
                        Some("Correo duplicado"),
                    ))
                    .await;
                return Err(err.into());
            }
            Err(err) => return Err(err.into()),
        };

        recorder
            .record(user_event(
                admin_user_id,
                "CREATE",
                Some(created.id),
                "Usuario creado",
                RESULT_EXITO,
                None,
            ))
            .await;

        Ok(to_dto(created))
    }

    /// List all accounts, newest first
    pub async fn list(&self, admin_user_id: i32) -> Result<Vec<UserDto>, Error> {
        let repository = UserRepository::new(self.db);
        let users = repository.list().await.map_err(UserError::from)?;

        AuditRecorder::new(self.db)
            .record(user_event(
                admin_user_id,
                "VIEW",
                None,
                "Listado usuarios",
                RESULT_EXITO,
                None,
            ))
            .await;

        Ok(users.into_iter().map(to_dto).collect())
    }

    /// Update an account's role and/or status; omitted fields keep their
    /// current value
    pub async fn update(
        &self,
        admin_user_id: i32,
        user_id: i32,
        update: UpdateUserDto,
    ) -> Result<UserDto, Error> {
        let role = update.role.as_deref().map(parse_role).transpose()?;
        let status = update.status.as_deref().map(parse_status).transpose()?;

        let repository = UserRepository::new(self.db);
        let updated = repository
            .update(user_id, role, status)
            .await
            .map_err(UserError::from)?
            .ok_or(UserError::NotFound(user_id))?;

        AuditRecorder::new(self.db)
            .record(user_event(
                admin_user_id,
                "UPDATE",
                Some(user_id),
                "Usuario actualizado",
                RESULT_EXITO,
                None,
            ))
            .await;

        Ok(to_dto(updated))
    }

    /// Delete an account
    pub async fn delete(&self, admin_user_id: i32, user_id: i32) -> Result<(), Error> {
        let repository = UserRepository::new(self.db);
        let result = repository.delete(user_id).await.map_err(UserError::from)?;

        if result.rows_affected == 0 {
            return Err(UserError::NotFound(user_id).into());
        }

        AuditRecorder::new(self.db)
            .record(user_event(
                admin_user_id,
                "UPDATE",
                Some(user_id),
                "Usuario eliminado",
                RESULT_EXITO,
                None,
            ))
            .await;

        Ok(())
    }
}

fn parse_role(role: &str) -> Result<UserRole, UserError> {
    UserRole::try_from_value(&role.to_string()).map_err(|_| UserError::InvalidRole(role.to_string()))
}

fn parse_status(status: &str) -> Result<UserStatus, UserError> {
    UserStatus::try_from_value(&status.to_string())
        .map_err(|_| UserError::InvalidStatus(status.to_string()))
}

fn to_dto(user: siglad_user::Model) -> UserDto {
    UserDto {
        id: user.id,
        name: user.name,
        email: user.email,
        role: user.role.to_value(),
        status: user.status.to_value(),
        created_at: user.created_at,
    }
}

fn user_event(
    admin_user_id: i32,
    action: &'static str,
    entity_id: Option<i32>,
    operation: &'static str,
    result: &'static str,
    details: Option<&str>,
) -> AuditEvent {
    AuditEvent {
        user_id: Some(admin_user_id),
        action,
        entity: "USER",
        entity_id: entity_id.map(|id| id.to_string()),
        operation: Some(operation),
        result,
        num_declaracion: None,
        details: details.map(str::to_string),
    }
}
