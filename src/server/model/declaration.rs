use chrono::NaiveDate;

/// Fully validated, normalized declaration header ready for insertion.
///
/// Country and currency codes are uppercased, monetary amounts coerced, and
/// every length limit already enforced by the validator.
#[derive(Clone, Debug, PartialEq)]
pub struct NewDeclaration {
    pub numero_documento: String,
    pub fecha_emision: NaiveDate,
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
}

/// Validated line item. `linea` is caller-assigned and stored verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct NewDeclarationItem {
    pub linea: i32,
    pub descripcion: String,
    pub cantidad: f64,
    pub unidad_medida: String,
    pub valor_unitario: f64,
    pub pais_origen: String,
}

/// Validator output: a typed header plus its line items.
#[derive(Clone, Debug)]
pub struct ValidDeclaration {
    pub header: NewDeclaration,
    pub items: Vec<NewDeclarationItem>,
}
