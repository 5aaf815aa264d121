use chrono::Utc;
use entity::{exporter, importer, importer::CatalogStatus};
use sea_orm::{ActiveEnum, ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Insert an importer catalog entry
pub async fn insert_importer(
    db: &DatabaseConnection,
    id: &str,
    nombre: &str,
    estado: &str,
) -> Result<importer::Model, TestError> {
    let estado = CatalogStatus::try_from_value(&estado.to_string())?;

    let entry = importer::ActiveModel {
        id: ActiveValue::Set(id.to_string()),
        nombre: ActiveValue::Set(nombre.to_string()),
        estado: ActiveValue::Set(estado),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    };

    Ok(entry.insert(db).await?)
}

/// Insert an exporter catalog entry
pub async fn insert_exporter(
    db: &DatabaseConnection,
    id: &str,
    nombre: &str,
    estado: &str,
) -> Result<exporter::Model, TestError> {
    let estado = CatalogStatus::try_from_value(&estado.to_string())?;

    let entry = exporter::ActiveModel {
        id: ActiveValue::Set(id.to_string()),
        nombre: ActiveValue::Set(nombre.to_string()),
        estado: ActiveValue::Set(estado),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    };

    Ok(entry.insert(db).await?)
}
