//! Service layer for business logic and orchestration.
//!
//! Services validate input, coordinate repositories, and emit audit events.
//! The declaration service owns the submission pipeline (validator plus
//! transactional persistence); the validation service owns the agent
//! decision workflow.

pub mod audit;
pub mod auth;
pub mod declaration;
pub mod user;
pub mod validation;
