//! Server-side models: application state, authentication context, and the
//! typed declaration produced by the validator.

pub mod app;
pub mod auth;
pub mod declaration;
