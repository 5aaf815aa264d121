use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use siglad::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::controller::user::{create_user, delete_user, list_users, update_user},
};

use super::*;

fn new_agent(email: &str) -> CreateUserDto {
    CreateUserDto {
        name: Some("Nuevo Agente".to_string()),
        email: Some(email.to_string()),
        password: Some("password123".to_string()),
        role: Some("AGENTE".to_string()),
        status: None,
    }
}

/// Expect 201 with the created account, password never echoed
#[tokio::test]
async fn creates_account() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    let admin = insert_user(&test.db, "ADMIN", "admin@siglad.local", "password123").await?;

    let result = create_user(
        State(test_app_state(&test.db)),
        auth_user(admin.id, UserRole::Admin),
        Json(new_agent("agente@siglad.local")),
    )
    .await;

    let response = into_response(result);
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: UserDto = body_json(response).await;
    assert_eq!(created.email, "agente@siglad.local");
    assert_eq!(created.role, "AGENTE");
    assert_eq!(created.status, "ACTIVE");

    Ok(())
}

/// Expect 409 for a duplicate email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    let admin = insert_user(&test.db, "ADMIN", "admin@siglad.local", "password123").await?;
    let state = test_app_state(&test.db);

    let first = create_user(
        State(state.clone()),
        auth_user(admin.id, UserRole::Admin),
        Json(new_agent("agente@siglad.local")),
    )
    .await;
    assert_eq!(into_response(first).status(), StatusCode::CREATED);

    let second = create_user(
        State(state),
        auth_user(admin.id, UserRole::Admin),
        Json(new_agent("agente@siglad.local")),
    )
    .await;
    assert_eq!(into_response(second).status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 403 for any non-admin caller
#[tokio::test]
async fn rejects_non_admin() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;

    let result = list_users(
        State(test_app_state(&test.db)),
        auth_user(1, UserRole::Agente),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect a partial update to change only the provided fields
#[tokio::test]
async fn updates_role_only() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    let admin = insert_user(&test.db, "ADMIN", "admin@siglad.local", "password123").await?;
    let agente = insert_user(&test.db, "AGENTE", "agente@siglad.local", "password123").await?;

    let result = update_user(
        State(test_app_state(&test.db)),
        auth_user(admin.id, UserRole::Admin),
        Path(agente.id),
        Json(UpdateUserDto {
            role: Some("ADMIN".to_string()),
            status: None,
        }),
    )
    .await;

    let response = into_response(result);
    assert_eq!(response.status(), StatusCode::OK);

    let updated: UserDto = body_json(response).await;
    assert_eq!(updated.role, "ADMIN");
    assert_eq!(updated.status, "ACTIVE");

    Ok(())
}

/// Expect 404 when deleting an account that does not exist
#[tokio::test]
async fn delete_missing_account_is_not_found() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    let admin = insert_user(&test.db, "ADMIN", "admin@siglad.local", "password123").await?;

    let result = delete_user(
        State(test_app_state(&test.db)),
        auth_user(admin.id, UserRole::Admin),
        Path(999),
    )
    .await;

    assert_eq!(into_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}
