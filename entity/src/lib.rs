//! Database entity definitions for the SIGLAD application.

pub mod audit_log;
pub mod declaration;
pub mod declaration_item;
pub mod exporter;
pub mod importer;
pub mod prelude;
pub mod siglad_user;
