use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use siglad::{
    model::catalog::{CatalogEntryDto, CatalogQuery},
    server::controller::catalog::{exporter_catalog, importer_catalog},
};

use super::*;

fn query(status: Option<&str>, q: Option<&str>) -> Query<CatalogQuery> {
    Query(CatalogQuery {
        status: status.map(str::to_string),
        q: q.map(str::to_string),
        limit: None,
    })
}

/// Expect only ACTIVO entries by default, ordered by nombre
#[tokio::test]
async fn defaults_to_active_entries() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    insert_importer(&test.db, "IMP-002", "Zapatera Norte", "ACTIVO").await?;
    insert_importer(&test.db, "IMP-001", "Importadora La Ceiba", "ACTIVO").await?;
    insert_importer(&test.db, "IMP-OFF", "Importadora Inactiva", "INACTIVO").await?;

    let result = importer_catalog(
        State(test_app_state(&test.db)),
        auth_user(1, UserRole::Transportista),
        query(None, None),
    )
    .await;

    let response = into_response(result);
    assert_eq!(response.status(), StatusCode::OK);

    let entries: Vec<CatalogEntryDto> = body_json(response).await;
    let nombres: Vec<&str> = entries.iter().map(|e| e.nombre.as_str()).collect();
    assert_eq!(nombres, vec!["Importadora La Ceiba", "Zapatera Norte"]);

    Ok(())
}

/// Expect the substring filter to match on id or nombre
#[tokio::test]
async fn filters_by_substring() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    insert_exporter(&test.db, "EXP-001", "Cafetalera del Sur", "ACTIVO").await?;
    insert_exporter(&test.db, "EXP-002", "Azucarera Norte", "ACTIVO").await?;

    let result = exporter_catalog(
        State(test_app_state(&test.db)),
        auth_user(1, UserRole::Agente),
        query(None, Some("Cafetalera")),
    )
    .await;

    let entries: Vec<CatalogEntryDto> = body_json(into_response(result)).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "EXP-001");

    Ok(())
}

/// Expect an unknown status filter to be rejected
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;

    let result = importer_catalog(
        State(test_app_state(&test.db)),
        auth_user(1, UserRole::Admin),
        query(Some("SUSPENDIDO"), None),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    Ok(())
}
