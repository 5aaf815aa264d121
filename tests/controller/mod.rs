//! Tests for HTTP controller endpoints.
//!
//! Handlers are invoked directly with a test `AppState` backed by an
//! in-memory SQLite database; role gates are exercised by passing an
//! `AuthUser` with the role under test.

mod auth;
mod catalog;
mod declaration;
mod user;
mod validation;

use siglad_test_utils::prelude::*;

use crate::util::{auth_user, body_json, into_response, test_app_state};
