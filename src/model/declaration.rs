use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw DUCA submission payload.
///
/// Every field is optional at the serde level so the validator can walk the
/// whole payload and report all missing paths at once instead of failing on
/// the first absent field. Monetary amounts arrive as arbitrary JSON values
/// because clients send numbers, numeric strings, or empty strings
/// interchangeably; the validator coerces them.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DucaPayload {
    pub numero_documento: Option<String>,
    pub fecha_emision: Option<String>,
    pub pais_emisor: Option<String>,
    pub tipo_operacion: Option<String>,
    pub exportador: Option<ExportadorDto>,
    pub importador: Option<ImportadorDto>,
    pub transporte: Option<TransporteDto>,
    pub mercancias: Option<MercanciasDto>,
    pub valores: Option<ValoresDto>,
    pub resultado_selectivo: Option<ResultadoSelectivoDto>,
    pub estado_documento: Option<String>,
    pub firma_electronica: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportadorDto {
    pub id_exportador: Option<String>,
    pub nombre_exportador: Option<String>,
    pub direccion_exportador: Option<String>,
    pub contacto_exportador: Option<ContactoDto>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportadorDto {
    pub id_importador: Option<String>,
    pub nombre_importador: Option<String>,
    pub direccion_importador: Option<String>,
    pub contacto_importador: Option<ContactoDto>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactoDto {
    pub telefono: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransporteDto {
    pub medio_transporte: Option<String>,
    pub placa_vehiculo: Option<String>,
    pub conductor: Option<ConductorDto>,
    pub ruta: Option<RutaDto>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConductorDto {
    pub nombre_conductor: Option<String>,
    pub licencia_conductor: Option<String>,
    pub pais_licencia: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RutaDto {
    pub aduana_salida: Option<String>,
    pub aduana_entrada: Option<String>,
    pub pais_destino: Option<String>,
    pub kilometros_aproximados: Option<i64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MercanciasDto {
    pub numero_items: Option<i64>,
    pub items: Option<Vec<MercanciaItemDto>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MercanciaItemDto {
    pub linea: Option<i64>,
    pub descripcion: Option<String>,
    pub cantidad: Option<f64>,
    pub unidad_medida: Option<String>,
    pub valor_unitario: Option<f64>,
    pub pais_origen: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValoresDto {
    #[schema(value_type = Object)]
    pub valor_factura: Option<serde_json::Value>,
    #[schema(value_type = Object)]
    pub gastos_transporte: Option<serde_json::Value>,
    #[schema(value_type = Object)]
    pub seguro: Option<serde_json::Value>,
    #[schema(value_type = Object)]
    pub otros_gastos: Option<serde_json::Value>,
    #[schema(value_type = Object)]
    pub valor_aduana_total: Option<serde_json::Value>,
    pub moneda: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultadoSelectivoDto {
    pub codigo: Option<String>,
    pub descripcion: Option<String>,
}

/// Request body for `POST /declarations`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitDeclarationDto {
    pub duca: Option<DucaPayload>,
}

/// Response body after a successful submission.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct DeclarationCreatedDto {
    pub id: i32,
    pub message: String,
}

/// Transporter-facing row of `GET /status/mine`.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct DeclarationSummaryDto {
    pub id: i32,
    pub numero_documento: String,
    pub estado: String,
    pub estado_documento: String,
    pub created_at: NaiveDateTime,
    pub validated_at: Option<NaiveDateTime>,
}

/// Agent-facing row of `GET /validation/pending`, ordered oldest-first.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct PendingDeclarationDto {
    pub id: i32,
    pub numero_documento: String,
    pub fecha_emision: NaiveDate,
    pub importador_nombre: String,
    pub exportador_nombre: String,
    pub valor_aduana_total: f64,
    pub moneda: String,
    pub estado: String,
}

/// Full detail of a declaration including its ordered line items.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct DeclarationDetailDto {
    pub id: i32,
    pub numero_documento: String,
    pub fecha_emision: NaiveDate,
    pub pais_emisor: String,
    pub tipo_operacion: String,
    pub estado: String,
    pub estado_documento: String,
    pub medio_transporte: String,
    pub placa_vehiculo: String,
    pub aduana_salida: String,
    pub aduana_entrada: String,
    pub pais_destino: String,
    pub kilometros_aproximados: Option<i32>,
    pub moneda: String,
    pub valor_aduana_total: f64,
    pub exportador_id: String,
    pub exportador_nombre: String,
    pub importador_id: String,
    pub importador_nombre: String,
    pub items: Vec<DeclarationItemDto>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct DeclarationItemDto {
    pub linea: i32,
    pub descripcion: String,
    pub cantidad: f64,
    pub unidad_medida: String,
    pub valor_unitario: f64,
    pub pais_origen: String,
}

/// Request body for `POST /validation/{id}/decision`.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct DecisionDto {
    pub decision: Option<String>,
    pub comentario: Option<String>,
}

/// Response body after a recorded decision.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct DecisionResultDto {
    pub ok: bool,
    pub id: i32,
    pub estado: String,
}
