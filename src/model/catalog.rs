use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Catalog entry as exposed to declaration-form lookups.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogEntryDto {
    pub id: String,
    pub nombre: String,
}

/// Catalog entry as exposed to the admin listing.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogAdminDto {
    pub id: String,
    pub nombre: String,
    pub estado: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertCatalogEntryDto {
    pub nombre: Option<String>,
    /// ACTIVO or INACTIVO; defaults to ACTIVO
    pub estado: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SetCatalogStatusDto {
    pub estado: Option<String>,
}

/// Query parameters for authenticated catalog lookups.
#[derive(Clone, Deserialize, IntoParams)]
pub struct CatalogQuery {
    /// ACTIVO (default) or INACTIVO
    pub status: Option<String>,
    /// Substring filter on id or nombre
    pub q: Option<String>,
    /// Result cap, default 100, maximum 500
    pub limit: Option<u64>,
}

/// Query parameters for the admin catalog listing.
#[derive(Clone, Deserialize, IntoParams)]
pub struct CatalogAdminQuery {
    /// Substring filter on id or nombre
    pub q: Option<String>,
}
