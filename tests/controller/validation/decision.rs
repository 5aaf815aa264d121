use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sea_orm::EntityTrait;
use siglad::{
    model::declaration::{DecisionDto, DecisionResultDto},
    server::controller::validation::decide_declaration,
};

use super::*;

fn decision(value: &str, comentario: Option<&str>) -> DecisionDto {
    DecisionDto {
        decision: Some(value.to_string()),
        comentario: comentario.map(str::to_string),
    }
}

/// Expect a recorded decision with the agent and comment persisted
#[tokio::test]
async fn records_decision_with_comment() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    let (agente_id, ids) = seed_pending(&test, &["DOC-001"]).await?;

    let result = decide_declaration(
        State(test_app_state(&test.db)),
        auth_user(agente_id, UserRole::Agente),
        Path(ids[0]),
        Json(decision("RECHAZADA", Some("Documentación incompleta"))),
    )
    .await;

    let response = into_response(result);
    assert_eq!(response.status(), StatusCode::OK);

    let body: DecisionResultDto = body_json(response).await;
    assert!(body.ok);
    assert_eq!(body.estado, "RECHAZADA");

    let stored = entity::prelude::Declaration::find_by_id(ids[0])
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.agente_user_id, Some(agente_id));
    assert_eq!(
        stored.comentario_agente.as_deref(),
        Some("Documentación incompleta")
    );
    assert!(stored.validated_at.is_some());

    Ok(())
}

/// Expect 404 when deciding the same declaration twice
#[tokio::test]
async fn rejects_second_decision() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    let (agente_id, ids) = seed_pending(&test, &["DOC-001"]).await?;
    let state = test_app_state(&test.db);

    let first = decide_declaration(
        State(state.clone()),
        auth_user(agente_id, UserRole::Agente),
        Path(ids[0]),
        Json(decision("VALIDADA", None)),
    )
    .await;
    assert_eq!(into_response(first).status(), StatusCode::OK);

    let second = decide_declaration(
        State(state),
        auth_user(agente_id, UserRole::Agente),
        Path(ids[0]),
        Json(decision("VALIDADA", None)),
    )
    .await;
    assert_eq!(into_response(second).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 for a decision value outside VALIDADA/RECHAZADA, leaving the
/// declaration untouched
#[tokio::test]
async fn rejects_unknown_decision_value() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    let (agente_id, ids) = seed_pending(&test, &["DOC-001"]).await?;

    let result = decide_declaration(
        State(test_app_state(&test.db)),
        auth_user(agente_id, UserRole::Agente),
        Path(ids[0]),
        Json(decision("APROBADA", None)),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::BAD_REQUEST);

    let stored = entity::prelude::Declaration::find_by_id(ids[0])
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.estado, entity::declaration::DeclarationState::Pendiente);

    Ok(())
}
