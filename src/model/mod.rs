//! API data transfer objects shared by all endpoints.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod declaration;
pub mod user;
