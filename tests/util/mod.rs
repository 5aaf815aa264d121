//! Shared helpers for controller tests.

use axum::{body::to_bytes, response::Response};
use entity::siglad_user::UserRole;
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use siglad::server::model::{
    app::AppState,
    auth::{AuthKeys, AuthUser},
};

pub static TEST_JWT_SECRET: &[u8] = b"test-secret";

pub fn test_app_state(db: &DatabaseConnection) -> AppState {
    AppState {
        db: db.clone(),
        auth: AuthKeys::from_secret(TEST_JWT_SECRET),
    }
}

pub fn auth_user(user_id: i32, role: UserRole) -> AuthUser {
    AuthUser { user_id, role }
}

/// Collapse a handler result into a plain response for status assertions
pub fn into_response<T, E>(result: Result<T, E>) -> Response
where
    T: axum::response::IntoResponse,
    E: axum::response::IntoResponse,
{
    match result {
        Ok(value) => value.into_response(),
        Err(err) => err.into_response(),
    }
}

/// Deserialize a response body, panicking with the raw payload on mismatch
pub async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");

    serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!(
            "failed to deserialize body: {err}: {}",
            String::from_utf8_lossy(&bytes)
        )
    })
}
