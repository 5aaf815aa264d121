use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::siglad_user::UserRole;

use crate::{
    model::{
        api::{ErrorDto, ForbiddenDto},
        declaration::{DecisionDto, DecisionResultDto, PendingDeclarationDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::validation::ValidationService,
    },
};

pub static VALIDATION_TAG: &str = "validation";

/// List every PENDIENTE declaration, oldest first
#[utoipa::path(
    get,
    path = "/validation/pending",
    tag = VALIDATION_TAG,
    responses(
        (status = 200, description = "The pending queue", body = Vec<PendingDeclarationDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an AGENTE", body = ForbiddenDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn pending_declarations(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, Error> {
    user.require_any_of(&[UserRole::Agente])?;

    let service = ValidationService::new(&state.db);
    let pending = service.list_pending().await?;

    Ok((StatusCode::OK, Json(pending)))
}

/// Record an agent decision on a PENDIENTE declaration
#[utoipa::path(
    post,
    path = "/validation/{id}/decision",
    tag = VALIDATION_TAG,
    params(
        ("id" = i32, Path, description = "Declaration id")
    ),
    request_body = DecisionDto,
    responses(
        (status = 200, description = "Decision recorded", body = DecisionResultDto),
        (status = 400, description = "Decision is not VALIDADA or RECHAZADA", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an AGENTE", body = ForbiddenDto),
        (status = 404, description = "Declaration not found or already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn decide_declaration(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
    Json(decision): Json<DecisionDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any_of(&[UserRole::Agente])?;

    let service = ValidationService::new(&state.db);
    let result = service.decide(user.user_id, id, decision).await?;

    Ok((StatusCode::OK, Json(result)))
}
