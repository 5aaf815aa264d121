use sea_orm::entity::prelude::*;

/// Merchandise line item. Owned by its declaration; `linea` numbers are
/// caller-assigned and stored verbatim.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "declaration_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub declaration_id: i32,
    pub linea: i32,
    pub descripcion: String,
    pub cantidad: f64,
    pub unidad_medida: String,
    pub valor_unitario: f64,
    pub pais_origen: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::declaration::Entity",
        from = "Column::DeclarationId",
        to = "super::declaration::Column::Id",
        on_delete = "Cascade"
    )]
    Declaration,
}

impl Related<super::declaration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Declaration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
