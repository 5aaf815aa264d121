//! Tests for catalog lookup and administration endpoints.

mod admin;
mod lookup;

use entity::siglad_user::UserRole;
use siglad_test_utils::fixtures::catalog::{insert_exporter, insert_importer};

use super::*;
