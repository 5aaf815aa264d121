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
        declaration::{DeclarationCreatedDto, DeclarationDetailDto, SubmitDeclarationDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::declaration::DeclarationService,
    },
};

pub static DECLARATION_TAG: &str = "declaration";

/// Submit a DUCA declaration for validation
#[utoipa::path(
    post,
    path = "/declarations",
    tag = DECLARATION_TAG,
    request_body = SubmitDeclarationDto,
    responses(
        (status = 201, description = "Declaration registered as PENDIENTE", body = DeclarationCreatedDto),
        (status = 400, description = "Payload failed validation", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a TRANSPORTISTA", body = ForbiddenDto),
        (status = 409, description = "Document number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn submit_declaration(
    State(state): State<AppState>,
    user: AuthUser,
    Json(submission): Json<SubmitDeclarationDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any_of(&[UserRole::Transportista])?;

    let service = DeclarationService::new(&state.db);
    let created = service.submit(user.user_id, submission).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a declaration with its line items
#[utoipa::path(
    get,
    path = "/declarations/{id}",
    tag = DECLARATION_TAG,
    params(
        ("id" = i32, Path, description = "Declaration id")
    ),
    responses(
        (status = 200, description = "Declaration detail", body = DeclarationDetailDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an AGENTE or ADMIN", body = ForbiddenDto),
        (status = 404, description = "Declaration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_declaration(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    user.require_any_of(&[UserRole::Agente, UserRole::Admin])?;

    let service = DeclarationService::new(&state.db);
    let detail = service.get_detail(id).await?;

    Ok((StatusCode::OK, Json(detail)))
}
