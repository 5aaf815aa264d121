//! Tests for DUCA submission and detail endpoints.

mod detail;
mod submit;

use entity::siglad_user::UserRole;
use sea_orm::DatabaseConnection;
use siglad::model::declaration::SubmitDeclarationDto;
use siglad_test_utils::fixtures::{catalog::insert_importer, declaration::duca_payload, user::insert_user};

use super::*;

pub fn submission(numero: &str, importador_id: &str) -> SubmitDeclarationDto {
    SubmitDeclarationDto {
        duca: Some(serde_json::from_value(duca_payload(numero, importador_id)).unwrap()),
    }
}

/// A transporter account plus an ACTIVO importer the fixture payload references
pub async fn seed_transporter(db: &DatabaseConnection) -> Result<i32, TestError> {
    let owner = insert_user(db, "TRANSPORTISTA", "trans@siglad.local", "password123").await?;
    insert_importer(db, "IMP-001", "Importadora La Ceiba", "ACTIVO").await?;

    Ok(owner.id)
}
