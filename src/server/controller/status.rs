use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::siglad_user::UserRole;

use crate::{
    model::{
        api::{ErrorDto, ForbiddenDto},
        declaration::DeclarationSummaryDto,
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::declaration::DeclarationService,
    },
};

pub static STATUS_TAG: &str = "status";

/// List the caller's own declarations, newest first
#[utoipa::path(
    get,
    path = "/status/mine",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "The caller's declarations", body = Vec<DeclarationSummaryDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a TRANSPORTISTA", body = ForbiddenDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn my_declarations(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    user.require_any_of(&[UserRole::Transportista])?;

    let service = DeclarationService::new(&state.db);
    let declarations = service.list_mine(user.user_id).await?;

    Ok((StatusCode::OK, Json(declarations)))
}
