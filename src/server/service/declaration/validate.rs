//! DUCA payload validator.
//!
//! Rules run in a fixed order, each stage on the output of the previous:
//! required fields (all violations collected at once), length limits
//! (rejected, never truncated server-side), country/currency code
//! normalization, item-set checks, and finally numeric coercion of the
//! monetary fields.

use chrono::NaiveDate;
use serde_json::Value;

use crate::{
    model::declaration::{DucaPayload, MercanciasDto},
    server::{
        error::declaration::DeclarationError,
        model::declaration::{NewDeclaration, NewDeclarationItem, ValidDeclaration},
    },
};

/// Validate and normalize a raw DUCA payload into a typed declaration.
pub fn validate(duca: DucaPayload) -> Result<ValidDeclaration, DeclarationError> {
    check_required(&duca)?;
    check_lengths(&duca)?;

    let exportador = duca.exportador.unwrap_or_default();
    let exportador_contacto = exportador.contacto_exportador.unwrap_or_default();
    let importador = duca.importador.unwrap_or_default();
    let importador_contacto = importador.contacto_importador.unwrap_or_default();
    let transporte = duca.transporte.unwrap_or_default();
    let conductor = transporte.conductor.unwrap_or_default();
    let ruta = transporte.ruta.unwrap_or_default();
    let mercancias = duca.mercancias.unwrap_or_default();
    let valores = duca.valores.unwrap_or_default();
    let selectivo = duca.resultado_selectivo.unwrap_or_default();

    let pais_emisor = to_country(duca.pais_emisor.as_deref(), "paisEmisor")?;
    let conductor_pais_licencia = match opt_text(conductor.pais_licencia.as_deref()) {
        Some(code) => Some(to_country(
            Some(code.as_str()),
            "transporte.conductor.paisLicencia",
        )?),
        None => None,
    };
    let ruta_pais_destino = to_country(
        ruta.pais_destino.as_deref(),
        "transporte.ruta.paisDestino",
    )?;
    let moneda = to_currency(valores.moneda.as_deref(), "valores.moneda")?;

    let items = check_items(&mercancias)?;

    let valor_factura = to_decimal(valores.valor_factura.as_ref(), "valores.valorFactura")?;
    let gastos_transporte =
        to_decimal(valores.gastos_transporte.as_ref(), "valores.gastosTransporte")?;
    let seguro = to_decimal(valores.seguro.as_ref(), "valores.seguro")?;
    let otros_gastos = to_decimal(valores.otros_gastos.as_ref(), "valores.otrosGastos")?;
    let valor_aduana_total = to_decimal(
        valores.valor_aduana_total.as_ref(),
        "valores.valorAduanaTotal",
    )?
    .ok_or_else(|| DeclarationError::InvalidNumber("valores.valorAduanaTotal".to_string()))?;
    if valor_aduana_total < 0.0 {
        return Err(DeclarationError::NegativeAmount(
            "valores.valorAduanaTotal".to_string(),
        ));
    }

    let fecha_emision = NaiveDate::parse_from_str(
        duca.fecha_emision.as_deref().unwrap_or_default().trim(),
        "%Y-%m-%d",
    )
    .map_err(|_| DeclarationError::InvalidDate("fechaEmision".to_string()))?;

    let ruta_km_aprox = match ruta.kilometros_aproximados {
        Some(km) if km < 0 => {
            return Err(DeclarationError::NegativeAmount(
                "transporte.ruta.kilometrosAproximados".to_string(),
            ))
        }
        Some(km) => Some(i32::try_from(km).map_err(|_| {
            DeclarationError::InvalidNumber("transporte.ruta.kilometrosAproximados".to_string())
        })?),
        None => None,
    };

    let header = NewDeclaration {
        numero_documento: text(duca.numero_documento.as_deref()),
        fecha_emision,
        pais_emisor,
        tipo_operacion: text(duca.tipo_operacion.as_deref()),
        exportador_id: text(exportador.id_exportador.as_deref()),
        exportador_nombre: text(exportador.nombre_exportador.as_deref()),
        exportador_direccion: opt_text(exportador.direccion_exportador.as_deref()),
        exportador_telefono: opt_text(exportador_contacto.telefono.as_deref()),
        exportador_email: opt_text(exportador_contacto.email.as_deref()),
        importador_id: text(importador.id_importador.as_deref()),
        importador_nombre: text(importador.nombre_importador.as_deref()),
        importador_direccion: opt_text(importador.direccion_importador.as_deref()),
        importador_telefono: opt_text(importador_contacto.telefono.as_deref()),
        importador_email: opt_text(importador_contacto.email.as_deref()),
        medio_transporte: text(transporte.medio_transporte.as_deref()),
        placa_vehiculo: text(transporte.placa_vehiculo.as_deref()),
        conductor_nombre: opt_text(conductor.nombre_conductor.as_deref()),
        conductor_licencia: opt_text(conductor.licencia_conductor.as_deref()),
        conductor_pais_licencia,
        ruta_aduana_salida: text(ruta.aduana_salida.as_deref()),
        ruta_aduana_entrada: text(ruta.aduana_entrada.as_deref()),
        ruta_pais_destino,
        ruta_km_aprox,
        valor_factura,
        gastos_transporte,
        seguro,
        otros_gastos,
        valor_aduana_total,
        moneda,
        selectivo_codigo: opt_text(selectivo.codigo.as_deref()),
        selectivo_descripcion: opt_text(selectivo.descripcion.as_deref()),
        estado_documento: text(duca.estado_documento.as_deref()),
        firma_electronica: opt_text(duca.firma_electronica.as_deref()),
    };

    Ok(ValidDeclaration { header, items })
}

fn filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_string()
}

fn opt_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Walk every mandatory path and report all absent ones at once.
fn check_required(duca: &DucaPayload) -> Result<(), DeclarationError> {
    let mut missing = Vec::new();

    if !filled(duca.numero_documento.as_deref()) {
        missing.push("duca.numeroDocumento");
    }
    if !filled(duca.fecha_emision.as_deref()) {
        missing.push("duca.fechaEmision");
    }
    if !filled(duca.pais_emisor.as_deref()) {
        missing.push("duca.paisEmisor");
    }
    if !filled(duca.tipo_operacion.as_deref()) {
        missing.push("duca.tipoOperacion");
    }

    let exportador = duca.exportador.as_ref();
    if !filled(exportador.and_then(|e| e.id_exportador.as_deref())) {
        missing.push("duca.exportador.idExportador");
    }
    if !filled(exportador.and_then(|e| e.nombre_exportador.as_deref())) {
        missing.push("duca.exportador.nombreExportador");
    }

    let importador = duca.importador.as_ref();
    if !filled(importador.and_then(|i| i.id_importador.as_deref())) {
        missing.push("duca.importador.idImportador");
    }
    if !filled(importador.and_then(|i| i.nombre_importador.as_deref())) {
        missing.push("duca.importador.nombreImportador");
    }

    let transporte = duca.transporte.as_ref();
    if !filled(transporte.and_then(|t| t.medio_transporte.as_deref())) {
        missing.push("duca.transporte.medioTransporte");
    }
    if !filled(transporte.and_then(|t| t.placa_vehiculo.as_deref())) {
        missing.push("duca.transporte.placaVehiculo");
    }

    let ruta = transporte.and_then(|t| t.ruta.as_ref());
    if !filled(ruta.and_then(|r| r.aduana_salida.as_deref())) {
        missing.push("duca.transporte.ruta.aduanaSalida");
    }
    if !filled(ruta.and_then(|r| r.aduana_entrada.as_deref())) {
        missing.push("duca.transporte.ruta.aduanaEntrada");
    }
    if !filled(ruta.and_then(|r| r.pais_destino.as_deref())) {
        missing.push("duca.transporte.ruta.paisDestino");
    }

    let mercancias = duca.mercancias.as_ref();
    if mercancias.is_none() {
        missing.push("duca.mercancias");
    }
    if mercancias.and_then(|m| m.numero_items).is_none() {
        missing.push("duca.mercancias.numeroItems");
    }
    if !mercancias
        .and_then(|m| m.items.as_ref())
        .is_some_and(|items| !items.is_empty())
    {
        missing.push("duca.mercancias.items[]");
    }

    let valores = duca.valores.as_ref();
    if valores
        .and_then(|v| v.valor_aduana_total.as_ref())
        .is_none_or(Value::is_null)
    {
        missing.push("duca.valores.valorAduanaTotal");
    }
    if !filled(valores.and_then(|v| v.moneda.as_deref())) {
        missing.push("duca.valores.moneda");
    }

    if !filled(duca.estado_documento.as_deref()) {
        missing.push("duca.estadoDocumento");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DeclarationError::MissingFields(
            missing.into_iter().map(str::to_string).collect(),
        ))
    }
}

fn check_len(value: Option<&str>, max: usize, field: &str) -> Result<(), DeclarationError> {
    match value {
        Some(v) if v.chars().count() > max => Err(DeclarationError::FieldTooLong {
            field: field.to_string(),
            max,
        }),
        _ => Ok(()),
    }
}

/// Reject the first field over its maximum length.
fn check_lengths(duca: &DucaPayload) -> Result<(), DeclarationError> {
    check_len(duca.numero_documento.as_deref(), 20, "numeroDocumento")?;
    check_len(duca.tipo_operacion.as_deref(), 20, "tipoOperacion")?;

    if let Some(exportador) = duca.exportador.as_ref() {
        check_len(
            exportador.id_exportador.as_deref(),
            15,
            "exportador.idExportador",
        )?;
        check_len(
            exportador.nombre_exportador.as_deref(),
            100,
            "exportador.nombreExportador",
        )?;
        check_len(
            exportador.direccion_exportador.as_deref(),
            120,
            "exportador.direccionExportador",
        )?;
        if let Some(contacto) = exportador.contacto_exportador.as_ref() {
            check_len(
                contacto.telefono.as_deref(),
                15,
                "exportador.contactoExportador.telefono",
            )?;
            check_len(
                contacto.email.as_deref(),
                60,
                "exportador.contactoExportador.email",
            )?;
        }
    }

    if let Some(importador) = duca.importador.as_ref() {
        check_len(
            importador.id_importador.as_deref(),
            15,
            "importador.idImportador",
        )?;
        check_len(
            importador.nombre_importador.as_deref(),
            100,
            "importador.nombreImportador",
        )?;
        check_len(
            importador.direccion_importador.as_deref(),
            120,
            "importador.direccionImportador",
        )?;
        if let Some(contacto) = importador.contacto_importador.as_ref() {
            check_len(
                contacto.telefono.as_deref(),
                15,
                "importador.contactoImportador.telefono",
            )?;
            check_len(
                contacto.email.as_deref(),
                60,
                "importador.contactoImportador.email",
            )?;
        }
    }

    if let Some(transporte) = duca.transporte.as_ref() {
        check_len(
            transporte.medio_transporte.as_deref(),
            20,
            "transporte.medioTransporte",
        )?;
        check_len(
            transporte.placa_vehiculo.as_deref(),
            10,
            "transporte.placaVehiculo",
        )?;
        if let Some(conductor) = transporte.conductor.as_ref() {
            check_len(
                conductor.nombre_conductor.as_deref(),
                80,
                "transporte.conductor.nombreConductor",
            )?;
            check_len(
                conductor.licencia_conductor.as_deref(),
                20,
                "transporte.conductor.licenciaConductor",
            )?;
        }
        if let Some(ruta) = transporte.ruta.as_ref() {
            check_len(
                ruta.aduana_salida.as_deref(),
                50,
                "transporte.ruta.aduanaSalida",
            )?;
            check_len(
                ruta.aduana_entrada.as_deref(),
                50,
                "transporte.ruta.aduanaEntrada",
            )?;
        }
    }

    if let Some(mercancias) = duca.mercancias.as_ref() {
        for (i, item) in mercancias.items.as_deref().unwrap_or_default().iter().enumerate() {
            check_len(
                item.descripcion.as_deref(),
                120,
                &format!("mercancias.items[{i}].descripcion"),
            )?;
            check_len(
                item.unidad_medida.as_deref(),
                10,
                &format!("mercancias.items[{i}].unidadMedida"),
            )?;
        }
    }

    if let Some(selectivo) = duca.resultado_selectivo.as_ref() {
        check_len(selectivo.codigo.as_deref(), 1, "resultadoSelectivo.codigo")?;
        check_len(
            selectivo.descripcion.as_deref(),
            60,
            "resultadoSelectivo.descripcion",
        )?;
    }

    check_len(duca.estado_documento.as_deref(), 20, "estadoDocumento")?;
    check_len(duca.firma_electronica.as_deref(), 64, "firmaElectronica")?;

    Ok(())
}

fn is_iso2(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}

fn to_country(value: Option<&str>, label: &str) -> Result<String, DeclarationError> {
    let code = value.unwrap_or_default().trim().to_uppercase();
    if is_iso2(&code) {
        Ok(code)
    } else {
        Err(DeclarationError::InvalidCountryCode(label.to_string()))
    }
}

fn to_currency(value: Option<&str>, label: &str) -> Result<String, DeclarationError> {
    let code = value.unwrap_or_default().trim().to_uppercase();
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(code)
    } else {
        Err(DeclarationError::InvalidCurrencyCode(label.to_string()))
    }
}

/// The client-supplied item count must match the actual item list, every
/// item must carry all six fields, and `linea` values must not repeat.
fn check_items(mercancias: &MercanciasDto) -> Result<Vec<NewDeclarationItem>, DeclarationError> {
    let items = mercancias.items.as_deref().unwrap_or_default();
    let declared = mercancias.numero_items.unwrap_or_default();

    if declared != items.len() as i64 {
        return Err(DeclarationError::ItemCountMismatch {
            declared,
            actual: items.len(),
        });
    }

    let mut seen_lineas = std::collections::HashSet::new();
    let mut validated = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        let mut fields = Vec::new();
        if item.linea.is_none() {
            fields.push("linea");
        }
        if !filled(item.descripcion.as_deref()) {
            fields.push("descripcion");
        }
        if item.cantidad.is_none() {
            fields.push("cantidad");
        }
        if !filled(item.unidad_medida.as_deref()) {
            fields.push("unidadMedida");
        }
        if item.valor_unitario.is_none() {
            fields.push("valorUnitario");
        }
        if !filled(item.pais_origen.as_deref()) {
            fields.push("paisOrigen");
        }
        if !fields.is_empty() {
            return Err(DeclarationError::ItemMissingFields {
                index: i,
                fields: fields.into_iter().map(str::to_string).collect(),
            });
        }

        let pais_origen = item.pais_origen.as_deref().unwrap_or_default().trim().to_uppercase();
        if !is_iso2(&pais_origen) {
            return Err(DeclarationError::InvalidCountryCode(format!(
                "mercancias.items[{i}].paisOrigen"
            )));
        }

        let cantidad = item.cantidad.unwrap_or_default();
        if cantidad < 0.0 {
            return Err(DeclarationError::NegativeAmount(format!(
                "mercancias.items[{i}].cantidad"
            )));
        }
        let valor_unitario = item.valor_unitario.unwrap_or_default();
        if valor_unitario < 0.0 {
            return Err(DeclarationError::NegativeAmount(format!(
                "mercancias.items[{i}].valorUnitario"
            )));
        }

        let linea = item
            .linea
            .and_then(|l| i32::try_from(l).ok())
            .ok_or_else(|| {
                DeclarationError::InvalidNumber(format!("mercancias.items[{i}].linea"))
            })?;
        if !seen_lineas.insert(linea) {
            return Err(DeclarationError::DuplicateItemLine { index: i, linea });
        }

        validated.push(NewDeclarationItem {
            linea,
            descripcion: text(item.descripcion.as_deref()),
            cantidad,
            unidad_medida: text(item.unidad_medida.as_deref()).to_uppercase(),
            valor_unitario,
            pais_origen,
        });
    }

    Ok(validated)
}

/// Coerce a loosely-typed monetary value. Absent, null, and empty-string
/// values map to `None`; anything else must be a finite number or a string
/// parsing as one.
fn to_decimal(value: Option<&Value>, label: &str) -> Result<Option<f64>, DeclarationError> {
    let invalid = || DeclarationError::InvalidNumber(label.to_string());

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Some)
            .ok_or_else(invalid),
        Some(Value::Number(n)) => n.as_f64().filter(|n| n.is_finite()).map(Some).ok_or_else(invalid),
        Some(_) => Err(invalid()),
    }
}
