//! Server application core modules.
//!
//! HTTP routing, authentication, validation, transactional persistence of
//! DUCA declarations, the agent decision workflow, catalog and user
//! administration, and the best-effort audit sink.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
