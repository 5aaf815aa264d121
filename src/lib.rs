//! SIGLAD — customs declaration (DUCA) management backend.
//!
//! Transporters submit declarations, customs agents validate or reject them,
//! and administrators manage users and the importer/exporter catalogs. The
//! crate exposes an axum HTTP API backed by PostgreSQL through sea-orm.

pub mod model;
pub mod server;
