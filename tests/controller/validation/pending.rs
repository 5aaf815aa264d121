use axum::{extract::State, http::StatusCode};
use siglad::{
    model::declaration::PendingDeclarationDto,
    server::controller::validation::pending_declarations,
};

use super::*;

/// Expect the pending queue in submission order, oldest first
#[tokio::test]
async fn lists_pending_oldest_first() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    let (agente_id, _) = seed_pending(&test, &["DOC-001", "DOC-002", "DOC-003"]).await?;

    let result = pending_declarations(
        State(test_app_state(&test.db)),
        auth_user(agente_id, UserRole::Agente),
    )
    .await;

    let response = into_response(result);
    assert_eq!(response.status(), StatusCode::OK);

    let pending: Vec<PendingDeclarationDto> = body_json(response).await;
    let numeros: Vec<&str> = pending
        .iter()
        .map(|p| p.numero_documento.as_str())
        .collect();
    assert_eq!(numeros, vec!["DOC-001", "DOC-002", "DOC-003"]);
    assert!(pending.iter().all(|p| p.estado == "PENDIENTE"));

    Ok(())
}

/// Expect 403 for a transporter
#[tokio::test]
async fn rejects_transporter() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;

    let result = pending_declarations(
        State(test_app_state(&test.db)),
        auth_user(1, UserRole::Transportista),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::FORBIDDEN);

    Ok(())
}
