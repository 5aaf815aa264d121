use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum UserError {
    #[error("Missing fields")]
    MissingFields,
    #[error("Email already exists")]
    DuplicateEmail,
    #[error("Unknown role {0:?}")]
    InvalidRole(String),
    #[error("Unknown status {0:?}")]
    InvalidStatus(String),
    #[error("User {0} not found")]
    NotFound(i32),
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingFields => (StatusCode::BAD_REQUEST, "Missing fields"),
            Self::DuplicateEmail => (StatusCode::CONFLICT, "Email already exists"),
            Self::InvalidRole(_) => (StatusCode::BAD_REQUEST, "Invalid role"),
            Self::InvalidStatus(_) => (StatusCode::BAD_REQUEST, "Invalid status"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::Database(err) => return InternalServerError(err).into_response(),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
