use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, ForbiddenDto};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing bearer token in Authorization header")]
    MissingToken,
    #[error("Bearer token failed verification")]
    InvalidToken,
    #[error("Invalid credentials for login attempt")]
    InvalidCredentials,
    #[error("Login attempt by disabled user {0}")]
    UserDisabled(i32),
    #[error("Role {current} is not one of the required roles {required:?}")]
    Forbidden {
        required: Vec<String>,
        current: String,
    },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => {
                tracing::debug!("{}", Self::MissingToken);

                unauthorized("Missing token")
            }
            Self::InvalidToken => {
                tracing::debug!("{}", Self::InvalidToken);

                unauthorized("Invalid token")
            }
            Self::InvalidCredentials => unauthorized("Invalid credentials"),
            Self::UserDisabled(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "User disabled".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Forbidden { required, current } => (
                StatusCode::FORBIDDEN,
                Json(ForbiddenDto {
                    error: "Forbidden: insufficient role".to_string(),
                    required,
                    current,
                }),
            )
                .into_response(),
        }
    }
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}
