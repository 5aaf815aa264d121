use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Errors raised by the declaration validator, repository, and decision
/// workflow. User-facing messages stay in Spanish to match the DUCA domain
/// vocabulary the clients of this API expect.
#[derive(Error, Debug)]
pub enum DeclarationError {
    /// All missing required paths, collected in one pass.
    #[error("Verifique los campos obligatorios: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    /// Fields over their limit are rejected, never truncated server-side.
    #[error("{field} excede el tamaño máximo ({max})")]
    FieldTooLong { field: String, max: usize },
    #[error("{0} debe ser ISO-3166 de 2 letras (ej: GT, SV)")]
    InvalidCountryCode(String),
    #[error("{0} debe ser ISO-4217 de 3 letras (ej: USD, GTQ)")]
    InvalidCurrencyCode(String),
    #[error("{0} debe ser numérico")]
    InvalidNumber(String),
    #[error("{0} debe ser una fecha válida (YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("{0} no puede ser negativo")]
    NegativeAmount(String),
    #[error("mercancias.numeroItems ({declared}) no coincide con items.length ({actual})")]
    ItemCountMismatch { declared: i64, actual: usize },
    #[error("mercancias.items[{index}] faltan: {}", .fields.join(", "))]
    ItemMissingFields { index: usize, fields: Vec<String> },
    #[error("mercancias.items[{index}] repite la línea {linea}")]
    DuplicateItemLine { index: usize, linea: i32 },
    #[error("Ya existe una DUCA con ese número: {0}")]
    DuplicateDocument(String),
    #[error("Importador no existe o está INACTIVO: {0}")]
    InvalidImporter(String),
    #[error("Declaración {0} no encontrada")]
    NotFound(i32),
    #[error("decision must be VALIDADA or RECHAZADA, got {0:?}")]
    InvalidDecision(String),
    /// Deliberately ambiguous: the caller cannot tell a missing declaration
    /// from one another agent already decided.
    #[error("Declaration {0} not found or already processed")]
    NotFoundOrAlreadyDecided(i32),
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl IntoResponse for DeclarationError {
    fn into_response(self) -> Response {
        match self {
            err @ (Self::MissingFields(_)
            | Self::FieldTooLong { .. }
            | Self::InvalidCountryCode(_)
            | Self::InvalidCurrencyCode(_)
            | Self::InvalidNumber(_)
            | Self::InvalidDate(_)
            | Self::NegativeAmount(_)
            | Self::ItemCountMismatch { .. }
            | Self::ItemMissingFields { .. }
            | Self::DuplicateItemLine { .. }
            | Self::InvalidImporter(_)) => bad_request(&err),
            err @ Self::InvalidDecision(_) => bad_request(&err),
            Self::DuplicateDocument(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Ya existe una DUCA con ese número".to_string(),
                }),
            )
                .into_response(),
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Declaración no encontrada".to_string(),
                }),
            )
                .into_response(),
            Self::NotFoundOrAlreadyDecided(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Declaration not found or already processed".to_string(),
                }),
            )
                .into_response(),
            Self::Database(err) => InternalServerError(err).into_response(),
        }
    }
}

fn bad_request(err: &DeclarationError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorDto {
            error: err.to_string(),
        }),
    )
        .into_response()
}
