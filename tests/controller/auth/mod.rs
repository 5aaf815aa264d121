//! Tests for the authentication endpoint.

mod login;

use super::*;
