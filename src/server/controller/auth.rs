use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, TokenDto},
    },
    server::{error::Error, model::app::AppState, service::auth::AuthService},
};

pub static AUTH_TAG: &str = "auth";

/// Authenticate with email and password, returning a bearer token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials accepted", body = TokenDto),
        (status = 401, description = "Unknown email or wrong password", body = ErrorDto),
        (status = 403, description = "Account is disabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(login): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let service = AuthService::new(&state.db, &state.auth);

    let token = service.login(&login.email, &login.password).await?;

    Ok((StatusCode::OK, Json(token)))
}
