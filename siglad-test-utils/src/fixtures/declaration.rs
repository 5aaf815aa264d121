use serde_json::{json, Value};

/// A complete, valid DUCA payload in client wire format.
///
/// Codes are deliberately lowercase where the validator is expected to
/// normalize them, and `otrosGastos` is an empty string to exercise the
/// empty-to-null monetary coercion.
pub fn duca_payload(numero_documento: &str, importador_id: &str) -> Value {
    json!({
        "numeroDocumento": numero_documento,
        "fechaEmision": "2026-08-01",
        "paisEmisor": "GT",
        "tipoOperacion": "IMPORTACION",
        "exportador": {
            "idExportador": "EXP-001",
            "nombreExportador": "Cafetalera del Sur",
            "direccionExportador": "Km 12 Carretera a El Salvador",
            "contactoExportador": {
                "telefono": "50255551234",
                "email": "ventas@cafetalera.gt"
            }
        },
        "importador": {
            "idImportador": importador_id,
            "nombreImportador": "Importadora La Ceiba",
            "direccionImportador": "Blvd Morazan 45, Tegucigalpa",
            "contactoImportador": {
                "telefono": "50499887766",
                "email": "compras@laceiba.hn"
            }
        },
        "transporte": {
            "medioTransporte": "TERRESTRE",
            "placaVehiculo": "C123BBB",
            "conductor": {
                "nombreConductor": "Juan Perez",
                "licenciaConductor": "LIC-9981",
                "paisLicencia": "GT"
            },
            "ruta": {
                "aduanaSalida": "Pedro de Alvarado",
                "aduanaEntrada": "La Hachadura",
                "paisDestino": "SV",
                "kilometrosAproximados": 120
            }
        },
        "mercancias": {
            "numeroItems": 1,
            "items": [
                {
                    "linea": 1,
                    "descripcion": "Cafe",
                    "cantidad": 10,
                    "unidadMedida": "KG",
                    "valorUnitario": 5,
                    "paisOrigen": "gt"
                }
            ]
        },
        "valores": {
            "valorFactura": 50,
            "gastosTransporte": 10,
            "seguro": 2,
            "otrosGastos": "",
            "valorAduanaTotal": 50,
            "moneda": "usd"
        },
        "resultadoSelectivo": {
            "codigo": "V",
            "descripcion": "Verde"
        },
        "estadoDocumento": "EMITIDA",
        "firmaElectronica": "3c9c2e7a51f04b6d"
    })
}
