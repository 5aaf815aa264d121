use axum::{extract::State, http::StatusCode, Json};
use siglad::{
    model::auth::{LoginDto, TokenDto},
    server::{controller::auth::login, model::auth::AuthKeys},
};
use siglad_test_utils::fixtures::user::{insert_user, insert_user_with_status};

use super::*;
use crate::util::TEST_JWT_SECRET;

fn credentials(email: &str, password: &str) -> LoginDto {
    LoginDto {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Expect 200 and a verifiable token for valid credentials
#[tokio::test]
async fn returns_token_for_valid_credentials() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    let user = insert_user(&test.db, "AGENTE", "agente@siglad.local", "password123").await?;

    let result = login(
        State(test_app_state(&test.db)),
        Json(credentials("agente@siglad.local", "password123")),
    )
    .await;

    let response = into_response(result);
    assert_eq!(response.status(), StatusCode::OK);

    let token: TokenDto = body_json(response).await;
    assert_eq!(token.user_id, user.id);
    assert_eq!(token.role, "AGENTE");

    let claims = AuthKeys::from_secret(TEST_JWT_SECRET)
        .verify(&token.token)
        .unwrap();
    assert_eq!(claims.sub, user.id);

    Ok(())
}

/// Expect 401 for a wrong password
#[tokio::test]
async fn returns_unauthorized_for_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    insert_user(&test.db, "AGENTE", "agente@siglad.local", "password123").await?;

    let result = login(
        State(test_app_state(&test.db)),
        Json(credentials("agente@siglad.local", "wrong")),
    )
    .await;

    let response = into_response(result);
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 for an unknown email, indistinguishable from a wrong password
#[tokio::test]
async fn returns_unauthorized_for_unknown_email() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;

    let result = login(
        State(test_app_state(&test.db)),
        Json(credentials("ghost@siglad.local", "password123")),
    )
    .await;

    let response = into_response(result);
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 403 for a disabled account
#[tokio::test]
async fn returns_forbidden_for_disabled_account() -> Result<(), TestError> {
    let test = test_setup_with_siglad_tables!()?;
    insert_user_with_status(
        &test.db,
        "TRANSPORTISTA",
        "trans@siglad.local",
        "password123",
        "INACTIVE",
    )
    .await?;

    let result = login(
        State(test_app_state(&test.db)),
        Json(credentials("trans@siglad.local", "password123")),
    )
    .await;

    let response = into_response(result);
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}
