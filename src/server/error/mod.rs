//! Error types for the SIGLAD server application.
//!
//! Each domain (authentication, declarations, users, catalogs, configuration)
//! has its own `thiserror` enum with an `IntoResponse` mapping; the top-level
//! [`Error`] aggregates them so handlers can use `?` freely. Anything without
//! a specific mapping collapses into an opaque 500 response while the full
//! detail goes to the operator-facing log.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod declaration;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, catalog::CatalogError, config::ConfigError,
        declaration::DeclarationError, user::UserError,
    },
};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    AuthError(#[from] AuthError),
    #[error(transparent)]
    DeclarationError(#[from] DeclarationError),
    #[error(transparent)]
    UserError(#[from] UserError),
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
    #[error(transparent)]
    BcryptError(#[from] bcrypt::BcryptError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::DeclarationError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// The full error is logged for operators; the client only ever sees a
/// generic message so store internals never leak through the API.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
