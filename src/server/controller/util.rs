use entity::importer::CatalogStatus;
use sea_orm::ActiveEnum;

use crate::server::error::catalog::CatalogError;

/// Parse a catalog estado value, defaulting to ACTIVO when absent.
pub fn parse_catalog_status(value: Option<&str>) -> Result<CatalogStatus, CatalogError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(CatalogStatus::Activo),
        Some(value) => CatalogStatus::try_from_value(&value.to_uppercase())
            .map_err(|_| CatalogError::InvalidStatus(value.to_string())),
    }
}

/// Parse a catalog estado value that must be present.
pub fn require_catalog_status(value: Option<&str>) -> Result<CatalogStatus, CatalogError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Err(CatalogError::InvalidStatus(String::new())),
        some => parse_catalog_status(some),
    }
}
