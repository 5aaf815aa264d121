//! HTTP request handlers.
//!
//! Controllers stay thin: resolve the authenticated user, gate on role,
//! delegate to a service or repository, and shape the response. All error
//! mapping lives in the error types themselves.

pub mod auth;
pub mod catalog;
pub mod declaration;
pub mod exporter;
pub mod health;
pub mod importer;
pub mod status;
pub mod user;
pub mod util;
pub mod validation;
