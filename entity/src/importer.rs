use sea_orm::entity::prelude::*;

/// Importer catalog entry, keyed by the external importer id.
///
/// Declarations reference this catalog at creation time; only entries with
/// estado ACTIVO are accepted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "importer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub nombre: String,
    pub estado: CatalogStatus,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum CatalogStatus {
    #[sea_orm(string_value = "ACTIVO")]
    Activo,
    #[sea_orm(string_value = "INACTIVO")]
    Inactivo,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
