use chrono::Utc;
use entity::importer::{self, CatalogStatus};
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Hard cap on the admin listing.
pub static ADMIN_LIST_LIMIT: u64 = 200;
/// Default and maximum caps on the authenticated catalog lookup.
pub static SEARCH_DEFAULT_LIMIT: u64 = 100;
pub static SEARCH_MAX_LIMIT: u64 = 500;

pub struct ImporterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImporterRepository<'a> {
    /// Creates a new instance of [`ImporterRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert or update a catalog entry keyed by its external id
    pub async fn upsert(
        &self,
        id: String,
        nombre: String,
        estado: CatalogStatus,
    ) -> Result<(), DbErr> {
        let entry = importer::ActiveModel {
            id: ActiveValue::Set(id),
            nombre: ActiveValue::Set(nombre),
            estado: ActiveValue::Set(estado),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::Importer::insert(entry)
            .on_conflict(
                OnConflict::column(importer::Column::Id)
                    .update_columns([importer::Column::Nombre, importer::Column::Estado])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Set the estado of an existing entry; false when the id is unknown
    pub async fn set_estado(&self, id: &str, estado: CatalogStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::Importer::update_many()
            .col_expr(importer::Column::Estado, Expr::value(estado))
            .filter(importer::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Admin listing, newest first, optionally filtered by substring on
    /// id or nombre
    pub async fn list_admin(&self, q: Option<&str>) -> Result<Vec<importer::Model>, DbErr> {
        let mut query = entity::prelude::Importer::find();

        if let Some(q) = q.filter(|q| !q.trim().is_empty()) {
            let q = q.trim();
            query = query.filter(
                Condition::any()
                    .add(importer::Column::Id.contains(q))
                    .add(importer::Column::Nombre.contains(q)),
            );
        }

        query
            .order_by_desc(importer::Column::CreatedAt)
            .limit(ADMIN_LIST_LIMIT)
            .all(self.db)
            .await
    }

    /// Catalog lookup by estado with optional substring filter, ordered by
    /// nombre; `limit` is clamped to [`SEARCH_MAX_LIMIT`]
    pub async fn search(
        &self,
        estado: CatalogStatus,
        q: Option<&str>,
        limit: Option<u64>,
    ) -> Result<Vec<importer::Model>, DbErr> {
        let limit = limit.unwrap_or(SEARCH_DEFAULT_LIMIT).min(SEARCH_MAX_LIMIT);

        let mut query = entity::prelude::Importer::find()
            .filter(importer::Column::Estado.eq(estado));

        if let Some(q) = q.filter(|q| !q.trim().is_empty()) {
            let q = q.trim();
            query = query.filter(
                Condition::any()
                    .add(importer::Column::Id.contains(q))
                    .add(importer::Column::Nombre.contains(q)),
            );
        }

        query
            .order_by_asc(importer::Column::Nombre)
            .limit(limit)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use entity::importer::CatalogStatus;
    use siglad_test_utils::{test_setup_with_siglad_tables, TestError};

    use super::ImporterRepository;

    /// Expect a second upsert with the same id to overwrite nombre and estado
    #[tokio::test]
    async fn upsert_overwrites_existing_entry() -> Result<(), TestError> {
        let test = test_setup_with_siglad_tables!()?;
        let repository = ImporterRepository::new(&test.db);

        repository
            .upsert(
                "IMP-001".to_string(),
                "Importadora GT".to_string(),
                CatalogStatus::Activo,
            )
            .await?;
        repository
            .upsert(
                "IMP-001".to_string(),
                "Importadora Guatemala".to_string(),
                CatalogStatus::Inactivo,
            )
            .await?;

        let entries = repository.list_admin(None).await?;

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].nombre, "Importadora Guatemala");
        assert_eq!(entries[0].estado, CatalogStatus::Inactivo);

        Ok(())
    }

    /// Expect the search to honor the estado filter
    #[tokio::test]
    async fn search_filters_by_estado() -> Result<(), TestError> {
        let test = test_setup_with_siglad_tables!()?;
        let repository = ImporterRepository::new(&test.db);

        repository
            .upsert(
                "IMP-001".to_string(),
                "Activa".to_string(),
                CatalogStatus::Activo,
            )
            .await?;
        repository
            .upsert(
                "IMP-002".to_string(),
                "Inactiva".to_string(),
                CatalogStatus::Inactivo,
            )
            .await?;

        let active = repository.search(CatalogStatus::Activo, None, None).await?;

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "IMP-001");

        Ok(())
    }

    /// Expect the limit to cap results
    #[tokio::test]
    async fn search_respects_limit() -> Result<(), TestError> {
        let test = test_setup_with_siglad_tables!()?;
        let repository = ImporterRepository::new(&test.db);

        for i in 0..5 {
            repository
                .upsert(
                    format!("IMP-{i:03}"),
                    format!("Importadora {i}"),
                    CatalogStatus::Activo,
                )
                .await?;
        }

        let capped = repository
            .search(CatalogStatus::Activo, None, Some(2))
            .await?;

        assert_eq!(capped.len(), 2);

        Ok(())
    }

    /// Expect toggling estado on an unknown id to report no match
    #[tokio::test]
    async fn set_estado_unknown_id_is_false() -> Result<(), TestError> {
        let test = test_setup_with_siglad_tables!()?;
        let repository = ImporterRepository::new(&test.db);

        let updated = repository
            .set_estado("IMP-404", CatalogStatus::Inactivo)
            .await?;

        assert!(!updated);

        Ok(())
    }
}
