//! Tests for the user administration endpoints.

mod manage;

use entity::siglad_user::UserRole;
use siglad_test_utils::fixtures::user::insert_user;

use super::*;
