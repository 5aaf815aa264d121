use chrono::Utc;
use entity::siglad_user::{self, UserRole, UserStatus};
use sea_orm::{ActiveEnum, ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Insert an ACTIVE user with the given role, email and password
pub async fn insert_user(
    db: &DatabaseConnection,
    role: &str,
    email: &str,
    password: &str,
) -> Result<siglad_user::Model, TestError> {
    insert_user_with_status(db, role, email, password, "ACTIVE").await
}

/// bcrypt's lowest accepted cost; production hashing uses the default cost
static TEST_BCRYPT_COST: u32 = 4;

/// Insert a user with an explicit status.
///
/// The password is bcrypt-hashed at the minimum cost to keep tests fast.
pub async fn insert_user_with_status(
    db: &DatabaseConnection,
    role: &str,
    email: &str,
    password: &str,
    status: &str,
) -> Result<siglad_user::Model, TestError> {
    let role = UserRole::try_from_value(&role.to_string())?;
    let status = UserStatus::try_from_value(&status.to_string())?;
    let password_hash = bcrypt::hash(password, TEST_BCRYPT_COST)?;

    let user = siglad_user::ActiveModel {
        name: ActiveValue::Set(email.split('@').next().unwrap_or(email).to_string()),
        email: ActiveValue::Set(email.to_string()),
        password_hash: ActiveValue::Set(password_hash),
        role: ActiveValue::Set(role),
        status: ActiveValue::Set(status),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}
