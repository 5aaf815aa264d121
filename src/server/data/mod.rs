//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations,
//! organized by aggregate: declarations (header plus items), users, the
//! importer/exporter catalogs, and the audit log.

pub mod audit;
pub mod declaration;
pub mod exporter;
pub mod importer;
pub mod user;
