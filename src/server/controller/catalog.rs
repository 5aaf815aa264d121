use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CatalogEntryDto, CatalogQuery},
    },
    server::{
        controller::util::parse_catalog_status,
        data::{exporter::ExporterRepository, importer::ImporterRepository},
        error::Error,
        model::{app::AppState, auth::AuthUser},
    },
};

pub static CATALOG_TAG: &str = "catalog";

/// Importer lookup for declaration forms; open to any authenticated user
#[utoipa::path(
    get,
    path = "/catalogs/importers",
    tag = CATALOG_TAG,
    params(CatalogQuery),
    responses(
        (status = 200, description = "Matching importers ordered by nombre", body = Vec<CatalogEntryDto>),
        (status = 400, description = "Invalid status filter", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn importer_catalog(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<CatalogQuery>,
) -> Result<impl IntoResponse, Error> {
    let estado = parse_catalog_status(query.status.as_deref())?;

    let repository = ImporterRepository::new(&state.db);
    let entries = repository
        .search(estado, query.q.as_deref(), query.limit)
        .await?;

    let entries: Vec<CatalogEntryDto> = entries
        .into_iter()
        .map(|entry| CatalogEntryDto {
            id: entry.id,
            nombre: entry.nombre,
        })
        .collect();

    Ok((StatusCode::OK, Json(entries)))
}

/// Exporter lookup for declaration forms; open to any authenticated user
#[utoipa::path(
    get,
    path = "/catalogs/exporters",
    tag = CATALOG_TAG,
    params(CatalogQuery),
    responses(
        (status = 200, description = "Matching exporters ordered by nombre", body = Vec<CatalogEntryDto>),
        (status = 400, description = "Invalid status filter", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn exporter_catalog(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<CatalogQuery>,
) -> Result<impl IntoResponse, Error> {
    let estado = parse_catalog_status(query.status.as_deref())?;

    let repository = ExporterRepository::new(&state.db);
    let entries = repository
        .search(estado, query.q.as_deref(), query.limit)
        .await?;

    let entries: Vec<CatalogEntryDto> = entries
        .into_iter()
        .map(|entry| CatalogEntryDto {
            id: entry.id,
            nombre: entry.nombre,
        })
        .collect();

    Ok((StatusCode::OK, Json(entries)))
}
