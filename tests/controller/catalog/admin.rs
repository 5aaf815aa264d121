use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use siglad::{
    model::catalog::{
        CatalogAdminDto, CatalogAdminQuery, SetCatalogStatusDto, UpsertCatalogEntryDto,
    },
    server::controller::importer::{list_importers, set_importer_estado, upsert_importer},
};

use super::*;

fn upsert(nombre: Option<&str>, estado: Option<&str>) -> Json<UpsertCatalogEntryDto> {
    Json(UpsertCatalogEntryDto {
        nombre: nombre.map(str::to_string),
        estado: estado.map(str::to_string),
    })
}

/// Expect an upserted entry to show up in the admin listing
#[tokio::test]
async fn upsert_then_list_round_trips() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    let state = test_app_state(&test.db);

    let result = upsert_importer(
        State(state.clone()),
        auth_user(1, UserRole::Admin),
        Path("IMP-001".to_string()),
        upsert(Some("Importadora La Ceiba"), None),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::OK);

    let result = list_importers(
        State(state),
        auth_user(1, UserRole::Admin),
        Query(CatalogAdminQuery { q: None }),
    )
    .await;

    let entries: Vec<CatalogAdminDto> = body_json(into_response(result)).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "IMP-001");
    assert_eq!(entries[0].estado, "ACTIVO");

    Ok(())
}

/// Expect an upsert on an existing id to replace nombre and estado
#[tokio::test]
async fn upsert_replaces_existing_entry() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    insert_importer(&test.db, "IMP-001", "Nombre Viejo", "ACTIVO").await?;

    let result = upsert_importer(
        State(test_app_state(&test.db)),
        auth_user(1, UserRole::Admin),
        Path("IMP-001".to_string()),
        upsert(Some("Nombre Nuevo"), Some("INACTIVO")),
    )
    .await;
    assert_eq!(into_response(result).status(), StatusCode::OK);

    let result = list_importers(
        State(test_app_state(&test.db)),
        auth_user(1, UserRole::Admin),
        Query(CatalogAdminQuery { q: None }),
    )
    .await;

    let entries: Vec<CatalogAdminDto> = body_json(into_response(result)).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].nombre, "Nombre Nuevo");
    assert_eq!(entries[0].estado, "INACTIVO");

    Ok(())
}

/// Expect 400 when nombre is missing
#[tokio::test]
async fn upsert_without_nombre_is_rejected() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;

    let result = upsert_importer(
        State(test_app_state(&test.db)),
        auth_user(1, UserRole::Admin),
        Path("IMP-001".to_string()),
        upsert(None, None),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 when toggling estado of an unknown id
#[tokio::test]
async fn set_estado_on_unknown_id_is_not_found() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;

    let result = set_importer_estado(
        State(test_app_state(&test.db)),
        auth_user(1, UserRole::Admin),
        Path("IMP-404".to_string()),
        Json(SetCatalogStatusDto {
            estado: Some("INACTIVO".to_string()),
        }),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 403 for a non-admin caller
#[tokio::test]
async fn rejects_non_admin() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;

    let result = list_importers(
        State(test_app_state(&test.db)),
        auth_user(1, UserRole::Transportista),
        Query(CatalogAdminQuery { q: None }),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::FORBIDDEN);

    Ok(())
}
