use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    /// Defaults to ACTIVE when omitted
    pub status: Option<String>,
}

/// Partial update; omitted fields keep their current value.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub role: Option<String>,
    pub status: Option<String>,
}
