use entity::siglad_user::UserStatus;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::auth::TokenDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::auth::AuthKeys,
        service::audit::{AuditEvent, AuditRecorder, RESULT_EXITO, RESULT_FALLO},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    keys: &'a AuthKeys,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, keys: &'a AuthKeys) -> Self {
        Self { db, keys }
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// Unknown email and wrong password both map to the same
    /// [`AuthError::InvalidCredentials`]; a disabled account is reported
    /// distinctly. Every attempt is audited.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenDto, Error> {
        let repository = UserRepository::new(self.db);
        let recorder = AuditRecorder::new(self.db);

        let Some(user) = repository.find_by_email(email).await? else {
            recorder
                .record(login_event(None, RESULT_FALLO, Some("Usuario no existe")))
                .await;
            return Err(AuthError::InvalidCredentials.into());
        };

        if user.status != UserStatus::Active {
            recorder
                .record(login_event(
                    Some(user.id),
                    RESULT_FALLO,
                    Some("Usuario inactivo"),
                ))
                .await;
            return Err(AuthError::UserDisabled(user.id).into());
        }

        if !bcrypt::verify(password, &user.password_hash)? {
            recorder
                .record(login_event(
                    Some(user.id),
                    RESULT_FALLO,
                    Some("Password incorrecto"),
                ))
                .await;
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.keys.issue(user.id, &user.email, user.role)?;

        recorder
            .record(login_event(Some(user.id), RESULT_EXITO, None))
            .await;

        Ok(TokenDto {
            token,
            role: user.role.to_value(),
            user_id: user.id,
        })
    }
}

fn login_event(user_id: Option<i32>, result: &'static str, details: Option<&str>) -> AuditEvent {
    AuditEvent {
        user_id,
        action: "LOGIN",
        entity: "AUTH",
        entity_id: None,
        operation: None,
        result,
        num_declaracion: None,
        details: details.map(str::to_string),
    }
}
