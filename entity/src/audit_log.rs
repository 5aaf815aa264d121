use sea_orm::entity::prelude::*;

/// Best-effort audit trail entry. Written by the audit sink; insert failures
/// never propagate to the request that produced the event.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "audit_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<i32>,
    pub action: String,
    pub entity: String,
    pub entity_id: Option<String>,
    pub operation: Option<String>,
    pub result: Option<String>,
    pub num_declaracion: Option<String>,
    pub details: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
