use axum::{extract::State, http::StatusCode, Json};
use sea_orm::EntityTrait;
use siglad::{
    model::{api::ForbiddenDto, declaration::DeclarationCreatedDto},
    server::controller::declaration::submit_declaration,
};
use siglad_test_utils::fixtures::catalog::insert_importer;

use super::*;

/// Expect 201 with normalized codes persisted for a valid submission
#[tokio::test]
async fn creates_declaration_with_normalized_codes() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    let owner_id = seed_transporter(&test.db).await?;

    let result = submit_declaration(
        State(test_app_state(&test.db)),
        auth_user(owner_id, UserRole::Transportista),
        Json(submission("DOC-001", "IMP-001")),
    )
    .await;

    let response = into_response(result);
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: DeclarationCreatedDto = body_json(response).await;
    assert_eq!(created.message, "Declaración registrada correctamente");

    let header = entity::prelude::Declaration::find_by_id(created.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(header.moneda, "USD");

    let items = entity::prelude::DeclarationItem::find().all(&test.db).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].linea, 1);
    assert_eq!(items[0].pais_origen, "GT");

    Ok(())
}

/// Expect 403 naming required and current roles for a non-transporter
#[tokio::test]
async fn rejects_non_transporter_with_roles_named() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    seed_transporter(&test.db).await?;

    let result = submit_declaration(
        State(test_app_state(&test.db)),
        auth_user(99, UserRole::Agente),
        Json(submission("DOC-001", "IMP-001")),
    )
    .await;

    let response = into_response(result);
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: ForbiddenDto = body_json(response).await;
    assert_eq!(body.required, vec!["TRANSPORTISTA".to_string()]);
    assert_eq!(body.current, "AGENTE");

    Ok(())
}

/// Expect 409 on a duplicate document number with no extra item rows
#[tokio::test]
async fn rejects_duplicate_document_number() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    let owner_id = seed_transporter(&test.db).await?;
    let state = test_app_state(&test.db);

    let first = submit_declaration(
        State(state.clone()),
        auth_user(owner_id, UserRole::Transportista),
        Json(submission("DOC-001", "IMP-001")),
    )
    .await;
    assert_eq!(into_response(first).status(), StatusCode::CREATED);

    let second = submit_declaration(
        State(state),
        auth_user(owner_id, UserRole::Transportista),
        Json(submission("DOC-001", "IMP-001")),
    )
    .await;
    assert_eq!(into_response(second).status(), StatusCode::CONFLICT);

    let items = entity::prelude::DeclarationItem::find().all(&test.db).await?;
    assert_eq!(items.len(), 1);

    Ok(())
}

/// Expect 400 listing the exact missing path when the importer id is omitted
#[tokio::test]
async fn lists_missing_importer_id_path() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    let owner_id = seed_transporter(&test.db).await?;

    let mut submission = submission("DOC-001", "IMP-001");
    if let Some(duca) = submission.duca.as_mut() {
        if let Some(importador) = duca.importador.as_mut() {
            importador.id_importador = None;
        }
    }

    let result = submit_declaration(
        State(test_app_state(&test.db)),
        auth_user(owner_id, UserRole::Transportista),
        Json(submission),
    )
    .await;

    let response = into_response(result);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: siglad::model::api::ErrorDto = body_json(response).await;
    assert!(body.error.contains("duca.importador.idImportador"));

    Ok(())
}

/// Expect 400 and nothing persisted when two items share a linea
#[tokio::test]
async fn rejects_repeated_item_linea() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    let owner_id = seed_transporter(&test.db).await?;

    let mut submission = submission("DOC-003", "IMP-001");
    if let Some(mercancias) = submission
        .duca
        .as_mut()
        .and_then(|duca| duca.mercancias.as_mut())
    {
        let items = mercancias.items.as_mut().unwrap();
        let second = items[0].clone();
        items.push(second);
        mercancias.numero_items = Some(2);
    }

    let result = submit_declaration(
        State(test_app_state(&test.db)),
        auth_user(owner_id, UserRole::Transportista),
        Json(submission),
    )
    .await;

    let response = into_response(result);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: siglad::model::api::ErrorDto = body_json(response).await;
    assert!(body.error.contains("repite la línea"));

    let headers = entity::prelude::Declaration::find().all(&test.db).await?;
    assert!(headers.is_empty());

    Ok(())
}

/// Expect 400 and no header row when the importer is INACTIVO
#[tokio::test]
async fn rejects_inactive_importer_without_header() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    let owner_id = seed_transporter(&test.db).await?;
    insert_importer(&test.db, "IMP-OFF", "Importadora Inactiva", "INACTIVO").await?;

    let result = submit_declaration(
        State(test_app_state(&test.db)),
        auth_user(owner_id, UserRole::Transportista),
        Json(submission("DOC-002", "IMP-OFF")),
    )
    .await;

    let response = into_response(result);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let headers = entity::prelude::Declaration::find().all(&test.db).await?;
    assert!(headers.is_empty());

    Ok(())
}
