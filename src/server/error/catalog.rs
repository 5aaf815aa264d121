use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("id y nombre son requeridos")]
    MissingFields,
    #[error("estado inválido: {0:?}")]
    InvalidStatus(String),
    #[error("No existe el registro {0:?}")]
    NotFound(String),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingFields => (StatusCode::BAD_REQUEST, "id y nombre son requeridos"),
            Self::InvalidStatus(_) => (StatusCode::BAD_REQUEST, "estado inválido"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "No existe el registro"),
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
