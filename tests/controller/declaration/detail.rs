use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use siglad::{
    model::declaration::{DeclarationCreatedDto, DeclarationDetailDto},
    server::controller::declaration::{get_declaration, submit_declaration},
};

use super::*;

async fn seed_declaration(test: &TestSetup) -> Result<i32, TestError> {
    let owner_id = seed_transporter(&test.db).await?;

    let result = submit_declaration(
        State(test_app_state(&test.db)),
        auth_user(owner_id, UserRole::Transportista),
        Json(submission("DOC-001", "IMP-001")),
    )
    .await;

    let created: DeclarationCreatedDto = body_json(into_response(result)).await;

    Ok(created.id)
}

/// Expect 200 with the full detail and ordered items for an agent
#[tokio::test]
async fn returns_detail_for_agent() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    let id = seed_declaration(&test).await?;

    let result = get_declaration(
        State(test_app_state(&test.db)),
        auth_user(50, UserRole::Agente),
        Path(id),
    )
    .await;

    let response = into_response(result);
    assert_eq!(response.status(), StatusCode::OK);

    let detail: DeclarationDetailDto = body_json(response).await;
    assert_eq!(detail.numero_documento, "DOC-001");
    assert_eq!(detail.estado, "PENDIENTE");
    assert_eq!(detail.pais_destino, "SV");
    assert_eq!(detail.items.len(), 1);
    assert_eq!(detail.items[0].unidad_medida, "KG");

    Ok(())
}

/// Expect 404 for an unknown declaration id
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;

    let result = get_declaration(
        State(test_app_state(&test.db)),
        auth_user(50, UserRole::Admin),
        Path(999),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 403 for a transporter requesting the agent-facing detail
#[tokio::test]
async fn rejects_transporter() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    let id = seed_declaration(&test).await?;

    let result = get_declaration(
        State(test_app_state(&test.db)),
        auth_user(50, UserRole::Transportista),
        Path(id),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::FORBIDDEN);

    Ok(())
}
