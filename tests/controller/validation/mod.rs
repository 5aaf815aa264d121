//! Tests for the agent validation workflow endpoints.

mod decision;
mod pending;

use axum::{extract::State, Json};
use entity::siglad_user::UserRole;
use siglad::server::controller::declaration::submit_declaration;
use siglad_test_utils::fixtures::user::insert_user;

use super::{declaration::{seed_transporter, submission}, *};

/// Seed one PENDIENTE declaration per document number, in submission order
pub async fn seed_pending(
    test: &TestSetup,
    numeros: &[&str],
) -> Result<(i32, Vec<i32>), TestError> {
    let owner_id = seed_transporter(&test.db).await?;
    let agente = insert_user(&test.db, "AGENTE", "agente@siglad.local", "password123").await?;

    let mut ids = Vec::new();
    for numero in numeros {
        let result = submit_declaration(
            State(test_app_state(&test.db)),
            auth_user(owner_id, UserRole::Transportista),
            Json(submission(numero, "IMP-001")),
        )
        .await;

        let created: siglad::model::declaration::DeclarationCreatedDto =
            body_json(into_response(result)).await;
        ids.push(created.id);
    }

    Ok((agente.id, ids))
}
