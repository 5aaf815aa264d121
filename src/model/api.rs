use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a role check denies access, naming the roles that would
/// have been accepted and the role the caller actually holds.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ForbiddenDto {
    pub error: String,
    pub required: Vec<String>,
    pub current: String,
}

/// Generic acknowledgement body.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct OkDto {
    pub ok: bool,
}

/// Liveness probe body.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub ok: bool,
}

/// Database reachability probe body.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DbHealthDto {
    pub db: bool,
}
