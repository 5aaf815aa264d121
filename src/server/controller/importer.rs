use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::siglad_user::UserRole;
use sea_orm::ActiveEnum;

use crate::{
    model::{
        api::{ErrorDto, ForbiddenDto, OkDto},
        catalog::{CatalogAdminDto, CatalogAdminQuery, SetCatalogStatusDto, UpsertCatalogEntryDto},
    },
    server::{
        controller::util::{parse_catalog_status, require_catalog_status},
        data::importer::ImporterRepository,
        error::{catalog::CatalogError, Error},
        model::{app::AppState, auth::AuthUser},
    },
};

pub static IMPORTER_TAG: &str = "importer";

/// Admin listing of the importer catalog
#[utoipa::path(
    get,
    path = "/admin/importers",
    tag = IMPORTER_TAG,
    params(CatalogAdminQuery),
    responses(
        (status = 200, description = "Importer catalog entries, newest first", body = Vec<CatalogAdminDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an ADMIN", body = ForbiddenDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_importers(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<CatalogAdminQuery>,
) -> Result<impl IntoResponse, Error> {
    user.require_any_of(&[UserRole::Admin])?;

    let repository = ImporterRepository::new(&state.db);
    let entries = repository.list_admin(query.q.as_deref()).await?;

    let entries: Vec<CatalogAdminDto> = entries
        .into_iter()
        .map(|entry| CatalogAdminDto {
            id: entry.id,
            nombre: entry.nombre,
            estado: entry.estado.to_value(),
            created_at: entry.created_at,
        })
        .collect();

    Ok((StatusCode::OK, Json(entries)))
}

/// Create or replace an importer catalog entry
#[utoipa::path(
    put,
    path = "/admin/importers/{id}",
    tag = IMPORTER_TAG,
    params(
        ("id" = String, Path, description = "External importer id")
    ),
    request_body = UpsertCatalogEntryDto,
    responses(
        (status = 200, description = "Entry upserted", body = OkDto),
        (status = 400, description = "Missing nombre or invalid estado", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an ADMIN", body = ForbiddenDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upsert_importer(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(entry): Json<UpsertCatalogEntryDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any_of(&[UserRole::Admin])?;

    let nombre = entry
        .nombre
        .map(|nombre| nombre.trim().to_string())
        .filter(|nombre| !nombre.is_empty())
        .ok_or(CatalogError::MissingFields)?;
    let estado = parse_catalog_status(entry.estado.as_deref())?;

    let repository = ImporterRepository::new(&state.db);
    repository.upsert(id, nombre, estado).await?;

    Ok((StatusCode::OK, Json(OkDto { ok: true })))
}

/// Toggle an importer's estado
#[utoipa::path(
    patch,
    path = "/admin/importers/{id}/estado",
    tag = IMPORTER_TAG,
    params(
        ("id" = String, Path, description = "External importer id")
    ),
    request_body = SetCatalogStatusDto,
    responses(
        (status = 200, description = "Estado updated", body = OkDto),
        (status = 400, description = "Invalid estado", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an ADMIN", body = ForbiddenDto),
        (status = 404, description = "Importer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn set_importer_estado(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(status): Json<SetCatalogStatusDto>,
) -> Result<impl IntoResponse, Error> {
    user.require_any_of(&[UserRole::Admin])?;

    let estado = require_catalog_status(status.estado.as_deref())?;

    let repository = ImporterRepository::new(&state.db);
    let updated = repository.set_estado(&id, estado).await?;

    if !updated {
        return Err(CatalogError::NotFound(id).into());
    }

    Ok((StatusCode::OK, Json(OkDto { ok: true })))
}
