use sea_orm::entity::prelude::*;

/// DUCA declaration header, one row per document.
///
/// Snapshot fields capture the exporter/importer data as submitted; the
/// importer catalog is only consulted for the ACTIVO gate at insert time.
/// `estado_documento` is the free-form document lifecycle label supplied by
/// the transporter; `estado` is the workflow state driven by agent decisions.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "declaration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub numero_documento: String,
    pub fecha_emision: chrono::NaiveDate,
    pub pais_emisor: String,
    pub tipo_operacion: String,
    pub exportador_id: String,
    pub exportador_nombre: String,
    pub exportador_direccion: Option<String>,
    pub exportador_telefono: Option<String>,
    pub exportador_email: Option<String>,
    pub importador_id: String,
    pub importador_nombre: String,
    pub importador_direccion: Option<String>,
    pub importador_telefono: Option<String>,
    pub importador_email: Option<String>,
    pub medio_transporte: String,
    pub placa_vehiculo: String,
    pub conductor_nombre: Option<String>,
    pub conductor_licencia: Option<String>,
    pub conductor_pais_licencia: Option<String>,
    pub ruta_aduana_salida: String,
    pub ruta_aduana_entrada: String,
    pub ruta_pais_destino: String,
    pub ruta_km_aprox: Option<i32>,
    pub valor_factura: Option<f64>,
    pub gastos_transporte: Option<f64>,
    pub seguro: Option<f64>,
    pub otros_gastos: Option<f64>,
    pub valor_aduana_total: f64,
    pub moneda: String,
    pub selectivo_codigo: Option<String>,
    pub selectivo_descripcion: Option<String>,
    pub estado_documento: String,
    pub firma_electronica: Option<String>,
    pub estado: DeclarationState,
    pub owner_user_id: i32,
    pub agente_user_id: Option<i32>,
    pub comentario_agente: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub validated_at: Option<chrono::NaiveDateTime>,
}

/// Workflow state: PENDIENTE is the only initial state, VALIDADA and
/// RECHAZADA are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum DeclarationState {
    #[sea_orm(string_value = "PENDIENTE")]
    Pendiente,
    #[sea_orm(string_value = "VALIDADA")]
    Validada,
    #[sea_orm(string_value = "RECHAZADA")]
    Rechazada,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::declaration_item::Entity")]
    DeclarationItem,
    #[sea_orm(
        belongs_to = "super::siglad_user::Entity",
        from = "Column::OwnerUserId",
        to = "super::siglad_user::Column::Id"
    )]
    Owner,
}

impl Related<super::declaration_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeclarationItem.def()
    }
}

impl Related<super::siglad_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
